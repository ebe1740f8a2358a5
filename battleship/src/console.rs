//! Terminal implementation of the game console.
use std::io::{self, BufRead, Write};

use owo_colors::{OwoColorize, Stream::Stdout};

use hiddenship::{Console, Coordinate, Finished, ParseCoordinateError, Round};

use crate::display::{show_board, Banner, Ordinal};

/// Text of the welcome banner.
const WELCOME: &str = "Lets play some battleship";

/// [`Console`] that talks to the player over stdin/stdout.
pub struct TerminalConsole<B> {
    input: InputReader<B>,
}

impl<B> TerminalConsole<B> {
    pub fn new(input: InputReader<B>) -> Self {
        Self { input }
    }
}

impl<B: BufRead> Console for TerminalConsole<B> {
    fn welcome(&mut self) -> io::Result<()> {
        println!("{}", Banner::new(WELCOME));
        println!();
        Ok(())
    }

    fn reveal_target(&mut self, target: Coordinate) -> io::Result<()> {
        let line = format!("[DEBUG] ship position: {}", target);
        println!("{}", line.if_supports_color(Stdout, |text| text.bright_black()));
        Ok(())
    }

    fn show_turn(&mut self, round: &Round) -> io::Result<()> {
        let ordinal = Ordinal(round.attempt());
        println!();
        println!(
            "This is your {} try",
            ordinal.if_supports_color(Stdout, |text| text.blue())
        );
        println!("Your board:");
        show_board(round.iter_board());
        Ok(())
    }

    fn read_guess(&mut self) -> io::Result<Coordinate> {
        self.input.read_input("? Where am I?", |input| match input.parse::<Coordinate>() {
            Ok(coord) => Some(coord),
            Err(ParseCoordinateError::Format) => {
                println!(">> Invalid match. The answer must be in the 0,0 format");
                None
            }
            Err(ParseCoordinateError::Range(err)) => {
                println!(">> The {} position must be between 1 and 5", err.axis());
                None
            }
        })
    }

    fn won(&mut self, _result: &Finished) -> io::Result<()> {
        println!(
            "{}",
            "Great! You hit the ship!".if_supports_color(Stdout, |text| text.green())
        );
        Ok(())
    }

    fn lost(&mut self, result: &Finished) -> io::Result<()> {
        println!(
            "{}",
            "Sorry, you lost.".if_supports_color(Stdout, |text| text.red())
        );
        show_board(result.iter_board());
        Ok(())
    }

    fn confirm_retry(&mut self) -> io::Result<bool> {
        println!();
        self.input
            .read_input_lower("? Do you want to try again? (Y/n)", |input| match input {
                "yes" | "y" | "" => Some(true),
                "no" | "n" => Some(false),
                _ => {
                    println!("Invalid selection.");
                    None
                }
            })
    }
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    raw: Vec<u8>,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            raw: Vec::new(),
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Print the prompt, clear the string buffer and read a line. Bytes that are not
    /// valid UTF-8 become replacement characters so the checker rejects the line instead
    /// of the read failing. Running out of input is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.raw.clear();
        let read = self.read.read_until(b'\n', &mut self.raw)?;
        self.buf.clear();
        self.buf.push_str(&String::from_utf8_lossy(&self.raw));
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn reader(text: &str) -> InputReader<Cursor<Vec<u8>>> {
        InputReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn guesses_skip_invalid_lines() {
        let mut console = TerminalConsole::new(reader("nope\n0,3\n3,9\n 2,4 \n"));
        assert_eq!(console.read_guess().unwrap(), Coordinate::new(2, 4).unwrap());
    }

    #[test]
    fn invalid_utf8_is_reprompted() {
        let bytes = vec![0xff, 0xfe, b'\n', b'2', b',', b'4', b'\n'];
        let mut console = TerminalConsole::new(InputReader::new(Cursor::new(bytes)));
        assert_eq!(console.read_guess().unwrap(), Coordinate::new(2, 4).unwrap());
    }

    #[test]
    fn invalid_utf8_retry_answer_is_reprompted() {
        let bytes = vec![b'n', 0xc3, b'\n', b'n', b'o', b'\n'];
        let mut console = TerminalConsole::new(InputReader::new(Cursor::new(bytes)));
        assert!(!console.confirm_retry().unwrap());
    }

    #[test]
    fn retry_defaults_to_yes() {
        let mut console = TerminalConsole::new(reader("\nN\nmaybe\nYes\n"));
        assert!(console.confirm_retry().unwrap());
        assert!(!console.confirm_retry().unwrap());
        assert!(console.confirm_retry().unwrap());
    }

    #[test]
    fn closed_input_is_eof() {
        let mut console = TerminalConsole::new(reader("abc\n"));
        assert_eq!(
            console.read_guess().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
