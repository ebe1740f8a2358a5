//! Drives rounds back to back until the player wins or stops.
use std::io;

use rand::Rng;
use tracing::info;

use crate::{
    config::Config,
    coordinate::Coordinate,
    game::{Finished, Outcome, Round, Turn},
};

/// Everything the session needs from the terminal. Implementations own the prompting,
/// any re-prompting on invalid text, and all presentation.
pub trait Console {
    /// Greet the player. Called once, before the first round.
    fn welcome(&mut self) -> io::Result<()>;

    /// Show where the ship was placed. Only called when debugging is enabled.
    fn reveal_target(&mut self, target: Coordinate) -> io::Result<()>;

    /// Show the round before a guess: the try number and the board with the ship hidden.
    fn show_turn(&mut self, round: &Round) -> io::Result<()>;

    /// Ask for a guess, prompting again until valid text is entered.
    fn read_guess(&mut self) -> io::Result<Coordinate>;

    /// Announce a won round.
    fn won(&mut self, result: &Finished) -> io::Result<()>;

    /// Announce a lost round, showing where the ship was.
    fn lost(&mut self, result: &Finished) -> io::Result<()>;

    /// Ask whether to play another round after a loss.
    fn confirm_retry(&mut self) -> io::Result<bool>;
}

/// A game session. Owns the configuration, the source of ship placements, and the
/// console.
pub struct Session<R, C> {
    config: Config,
    rng: R,
    console: C,
}

impl<R: Rng, C: Console> Session<R, C> {
    /// Create a session with the given settings.
    pub fn new(config: Config, rng: R, console: C) -> Self {
        Self {
            config,
            rng,
            console,
        }
    }

    /// Extract the console from this session.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play until a round is won, or a round is lost and the player declines to retry.
    /// Returns the outcome of the last round.
    pub fn run(&mut self) -> io::Result<Outcome> {
        self.console.welcome()?;
        let mut rounds = 0u32;
        loop {
            rounds += 1;
            let round = Round::random(&mut self.rng, self.config.max_attempts());
            if self.config.debug() {
                self.console.reveal_target(round.target())?;
            }
            let result = self.play_round(round)?;
            match result.outcome() {
                Outcome::Won => {
                    self.console.won(&result)?;
                    info!(rounds, "session won");
                    return Ok(Outcome::Won);
                }
                Outcome::Lost => {
                    self.console.lost(&result)?;
                    if !self.console.confirm_retry()? {
                        info!(rounds, "session ended after a loss");
                        return Ok(Outcome::Lost);
                    }
                }
            }
        }
    }

    /// Ask for guesses until the round ends.
    fn play_round(&mut self, mut round: Round) -> io::Result<Finished> {
        loop {
            self.console.show_turn(&round)?;
            let guess = self.console.read_guess()?;
            match round.guess(guess) {
                Turn::Continue(next) => round = next,
                Turn::Over(result) => return Ok(result),
            }
        }
    }
}
