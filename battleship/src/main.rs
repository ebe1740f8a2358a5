use std::{env, io};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use hiddenship::{config, Config, Console, Outcome, Session};

use crate::console::{InputReader, TerminalConsole};

mod console;
mod display;
mod logging;

fn main() -> anyhow::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Find the ship hidden somewhere on a 5x5 grid.")
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("ATTEMPTS")
                .help("number of guesses allowed per round, overrides ATTEMPS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("print the ship position at the start of each round, same as DEBUG"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed ship placement so games can be replayed")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more to stderr, repeat for more detail"),
        )
        .get_matches();

    logging::init(matches.occurrences_of("verbose"))?;
    let config = load_config(&matches)?;
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let console = TerminalConsole::new(InputReader::new(stdin.lock()));
    let seed = matches
        .value_of("seed")
        .map(str::parse::<u64>)
        .transpose()
        .context("invalid --seed")?;
    let result = match seed {
        Some(seed) => play(config, StdRng::seed_from_u64(seed), console),
        None => play(config, rand::thread_rng(), console),
    };

    match result {
        Ok(outcome) => {
            debug!(?outcome, "game over");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            Ok(())
        }
        Err(err) => Err(err).context("failed to talk to the terminal"),
    }
}

/// Build the [`Config`] from the environment, then apply command line overrides. An
/// `--attempts` flag means `ATTEMPS` is never read.
fn load_config(matches: &ArgMatches) -> Result<Config, config::ConfigError> {
    let attempts = matches.value_of("attempts");
    let mut config = Config::from_lookup(|name| match name {
        config::ATTEMPTS_VAR if attempts.is_some() => None,
        _ => env::var(name).ok(),
    })?;
    if let Some(attempts) = attempts {
        config = config.with_max_attempts(config::parse_attempts("--attempts", attempts)?);
    }
    if matches.is_present("debug") {
        config = config.with_debug(true);
    }
    Ok(config)
}

/// Run a session to completion.
fn play(config: Config, rng: impl Rng, console: impl Console) -> io::Result<Outcome> {
    Session::new(config, rng, console).run()
}
