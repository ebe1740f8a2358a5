use assert_cmd::Command;
use predicates::prelude::*;

/// Every cell on the board, one guess per line.
fn sweep() -> String {
    let mut input = String::new();
    for y in 1..=5 {
        for x in 1..=5 {
            input.push_str(&format!("{},{}\n", x, y));
        }
    }
    input
}

fn battleship() -> Command {
    let mut cmd = Command::cargo_bin("battleship").unwrap();
    cmd.env_remove("DEBUG")
        .env_remove("ATTEMPS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Find where the ship is for the given seed by sweeping the board in debug mode.
fn ship_position(seed: &str) -> String {
    let output = battleship()
        .args(&["--seed", seed, "--debug", "--attempts", "25"])
        .write_stdin(sweep())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout
        .lines()
        .find(|line| line.starts_with("[DEBUG] ship position: "))
        .expect("debug line printed");
    line["[DEBUG] ship position: ".len()..].trim().to_string()
}

#[test]
fn sweeping_the_board_finds_the_ship() {
    battleship()
        .env("ATTEMPS", "25")
        .write_stdin(sweep())
        .assert()
        .success()
        .stdout(predicate::str::contains("Lets play some battleship"))
        .stdout(predicate::str::contains("This is your 1st try"))
        .stdout(predicate::str::contains("Great! You hit the ship!"))
        .stdout(predicate::str::contains("Sorry, you lost.").not())
        .stdout(predicate::str::contains("Do you want to try again?").not());
}

#[test]
fn debug_prints_the_ship_position() {
    battleship()
        .env("DEBUG", "1")
        .env("ATTEMPS", "25")
        .write_stdin(sweep())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[DEBUG\] ship position: [1-5],[1-5]").unwrap());
}

#[test]
fn no_debug_line_by_default() {
    battleship()
        .env("ATTEMPS", "25")
        .write_stdin(sweep())
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG]").not());
}

#[test]
fn invalid_guesses_are_explained() {
    let mut input = String::from("hello\n6,1\n1,0\n");
    input.push_str(&sweep());
    battleship()
        .env("ATTEMPS", "25")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid match. The answer must be in the 0,0 format",
        ))
        .stdout(predicate::str::contains("The X position must be between 1 and 5"))
        .stdout(predicate::str::contains("The Y position must be between 1 and 5"))
        .stdout(predicate::str::contains("Great! You hit the ship!"));
}

#[test]
fn losing_reveals_the_ship_and_offers_a_retry() {
    let ship = ship_position("1234");
    let miss = if ship == "1,1" { "2,2" } else { "1,1" };

    battleship()
        .args(&["--seed", "1234"])
        .env("ATTEMPS", "2")
        .write_stdin(format!("{0}\n{0}\nn\n", miss))
        .assert()
        .success()
        .stdout(predicate::str::contains("This is your 2nd try"))
        .stdout(predicate::str::contains("Sorry, you lost."))
        .stdout(predicate::str::contains("[o]"))
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("Do you want to try again?"))
        .stdout(predicate::str::contains("This is your 3rd try").not());
}

#[test]
fn retrying_starts_over_at_the_first_try() {
    let ship = ship_position("99");
    let miss = if ship == "5,5" { "4,4" } else { "5,5" };

    let output = battleship()
        .args(&["--seed", "99", "--attempts", "1"])
        .write_stdin(format!("{}\ny\n", miss))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("This is your 1st try").count(), 2);
    assert_eq!(stdout.matches("Lets play some battleship").count(), 1);
}

#[test]
fn invalid_attempts_fails_fast() {
    battleship()
        .env("ATTEMPS", "lots")
        .write_stdin("1,1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ATTEMPS"))
        .stdout(predicate::str::contains("Where am I?").not());
}

#[test]
fn closed_input_exits_cleanly() {
    battleship()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Where am I?"));
}

#[test]
fn non_utf8_guess_is_reprompted() {
    let mut input = vec![0xff, b'\n'];
    input.extend_from_slice(sweep().as_bytes());
    battleship()
        .env("ATTEMPS", "25")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid match. The answer must be in the 0,0 format",
        ))
        .stdout(predicate::str::contains("Great! You hit the ship!"));
}

#[test]
fn attempts_flag_wins_over_environment() {
    battleship()
        .args(&["--attempts", "25"])
        .env("ATTEMPS", "lots")
        .write_stdin(sweep())
        .assert()
        .success()
        .stdout(predicate::str::contains("Great! You hit the ship!"));
}
