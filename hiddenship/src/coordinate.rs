//! Positions on the 5x5 game grid.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use regex::Regex;

pub use self::errors::{Axis, OutOfRange, ParseCoordinateError};

mod errors;

/// Number of cells along each side of the grid.
pub const GRID_SIZE: u8 = 5;

/// Smallest valid value for either component of a [`Coordinate`].
pub const MIN: u8 = 1;

/// Largest valid value for either component of a [`Coordinate`].
pub const MAX: u8 = GRID_SIZE;

/// The coordinates of a single cell on the board. Both components are in the range
/// `[MIN, MAX]`; a value of this type is always in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    x: u8,
    /// Vertical position of the cell.
    y: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`, checking that both are
    /// on the grid. The x axis is checked first.
    pub fn new(x: u8, y: u8) -> Result<Self, OutOfRange> {
        check_axis(Axis::X, x)?;
        check_axis(Axis::Y, y)?;
        Ok(Self { x, y })
    }

    /// Horizontal position, in `[MIN, MAX]`.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Vertical position, in `[MIN, MAX]`.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Get an iterator over rows of the grid, top to bottom. Each row is an iterator over
    /// the coordinates of that row, left to right.
    pub fn rows() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        (MIN..=MAX).map(|y| (MIN..=MAX).map(move |x| Coordinate { x, y }))
    }

    /// Iterate every coordinate on the grid in the same order as [`Coordinate::rows`].
    pub fn all() -> impl Iterator<Item = Coordinate> {
        Self::rows().flatten()
    }

    /// Linear index of this cell in scan order.
    pub(crate) fn index(&self) -> usize {
        usize::from(self.y - MIN) * usize::from(GRID_SIZE) + usize::from(self.x - MIN)
    }
}

fn check_axis(axis: Axis, value: u8) -> Result<(), OutOfRange> {
    if (MIN..=MAX).contains(&value) {
        Ok(())
    } else {
        Err(OutOfRange::new(axis, value))
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse the `x,y` form. Only a single ASCII digit is allowed on each side of the
    /// comma, with no surrounding whitespace. Shape is checked before range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        /// Shape of a guess: one digit, a comma, one digit.
        static SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]),([0-9])$").unwrap());

        let captures = SHAPE.captures(s).ok_or(ParseCoordinateError::Format)?;
        // The pattern only admits ASCII digits, so the first byte is the whole value.
        let digit = |group: usize| captures[group].as_bytes()[0] - b'0';
        Ok(Coordinate::new(digit(1), digit(2))?)
    }
}

impl fmt::Display for Coordinate {
    /// Renders as `x,y`, the same form accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Distribution<Coordinate> for Standard {
    /// Every cell of the grid is equally likely.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate {
            x: rng.gen_range(MIN, MAX + 1),
            y: rng.gen_range(MIN, MAX + 1),
        }
    }
}
