//! Core of a single-player hidden ship game.
//!
//! A ship is hidden on one cell of a 5x5 grid and the player has a limited number of
//! guesses to find it. [`coordinate`] parses and validates guesses, [`board`] records
//! them, [`game`] runs a single round and [`session`] strings rounds together, delegating
//! all terminal interaction to a [`session::Console`].

pub mod board;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod session;

pub use crate::{
    board::{Board, Cell},
    config::{Config, ConfigError},
    coordinate::{Axis, Coordinate, OutOfRange, ParseCoordinateError},
    game::{Finished, Outcome, Round, Turn},
    session::{Console, Session},
};
