//! Errors produced when building or parsing a [`Coordinate`][super::Coordinate].
use std::fmt;

use thiserror::Error;

/// One of the two axes of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Axis::X => "X",
            Axis::Y => "Y",
        })
    }
}

/// Error returned when a component of a coordinate falls outside the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("the {axis} position must be between 1 and 5, got {value}")]
pub struct OutOfRange {
    /// Axis that was out of bounds.
    axis: Axis,
    /// The rejected value.
    value: u8,
}

impl OutOfRange {
    /// Construct an [`OutOfRange`] error for the given axis and value.
    pub(super) fn new(axis: Axis, value: u8) -> Self {
        Self { axis, value }
    }

    /// Get the axis that failed the bounds check.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Get the value that was rejected.
    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Reason why text could not be turned into a coordinate.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// The text was not a single digit, a comma, and a single digit.
    #[error("expected a coordinate in the form x,y")]
    Format,
    /// The text had the right shape but one of the components was off the grid.
    #[error(transparent)]
    Range(#[from] OutOfRange),
}
