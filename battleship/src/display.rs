//! Display helpers for the terminal front end.
use std::fmt;

use owo_colors::{OwoColorize, Stream::Stdout, Style};

use hiddenship::Cell;

/// Print the board. Takes an iterator over the rows of iterators over the cells.
pub fn show_board(rows: impl Iterator<Item = impl Iterator<Item = Cell>>) {
    for row in rows {
        for cell in row {
            print!("{}", BoardCell(cell));
        }
        println!();
    }
}

/// Display helper for a single bracketed board cell. Colored only when stdout supports it.
pub struct BoardCell(pub Cell);

impl BoardCell {
    /// The plain marker for the cell.
    pub fn marker(&self) -> &'static str {
        match self.0 {
            Cell::Empty => "[ ]",
            Cell::Miss => "[x]",
            Cell::Hit => "[*]",
            Cell::Ship => "[o]",
        }
    }
}

impl fmt::Display for BoardCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = self.marker();
        match self.0 {
            Cell::Empty => f.pad(marker),
            Cell::Miss => write!(f, "{}", marker.if_supports_color(Stdout, |m| m.red())),
            Cell::Hit => write!(f, "{}", marker.if_supports_color(Stdout, |m| m.green())),
            Cell::Ship => write!(
                f,
                "{}",
                marker.if_supports_color(Stdout, |m| m.style(Style::new().blue().bold()))
            ),
        }
    }
}

/// Display helper that prints a number as an English ordinal: `1st`, `2nd`, `11th`.
#[derive(Debug, Copy, Clone)]
pub struct Ordinal(pub u32);

impl Ordinal {
    /// The suffix for this number.
    fn suffix(&self) -> &'static str {
        match (self.0 % 10, self.0 % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.0, self.suffix()))
    }
}

/// Display helper that draws a cow saying a single line of text.
pub struct Banner<'a> {
    text: &'a str,
    eyes: &'a str,
    tongue: &'a str,
}

impl<'a> Banner<'a> {
    /// A banner with the given text, a surprised cow and its tongue out.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            eyes: "Oo",
            tongue: "U ",
        }
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.text.chars().count() + 2;
        writeln!(f, " {}", "_".repeat(width))?;
        writeln!(f, "< {} >", self.text)?;
        writeln!(f, " {}", "-".repeat(width))?;
        writeln!(f, "        \\   ^__^")?;
        writeln!(f, "         \\  ({})\\_______", self.eyes)?;
        writeln!(f, "            (__)\\       )\\/\\")?;
        writeln!(f, "             {} ||----w |", self.tongue)?;
        write!(f, "                ||     ||")
    }
}
