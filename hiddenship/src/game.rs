//! A single round of the game: one hidden ship and the guesses made against it.
//!
//! A [`Round`] waits for a guess. [`Round::guess`] consumes it and either hands it back
//! in [`Turn::Continue`] so the next guess can be made, or ends it with a [`Finished`]
//! result once the ship is found or the attempt budget is spent.
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    board::{Board, Cell},
    coordinate::Coordinate,
};

/// How a round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The player guessed the ship's position.
    Won,
    /// The player ran out of attempts.
    Lost,
}

/// Result of a single guess.
#[derive(Debug)]
pub enum Turn {
    /// The guess missed and attempts remain.
    Continue(Round),
    /// The round is over.
    Over(Finished),
}

/// A round in progress.
#[derive(Debug, Clone)]
pub struct Round {
    /// Where the ship is hidden.
    target: Coordinate,

    /// The number of the try being made, starting at 1.
    attempt: u32,

    /// Number of guesses allowed before the round is lost.
    max_attempts: u32,

    /// Guesses made so far.
    board: Board,
}

impl Round {
    /// Start a round with the ship at the given position.
    pub fn new(target: Coordinate, max_attempts: u32) -> Self {
        debug!(ship = %target, max_attempts, "round started");
        Self {
            target,
            attempt: 1,
            max_attempts,
            board: Board::new(),
        }
    }

    /// Start a round with the ship placed uniformly at random.
    pub fn random(rng: &mut impl Rng, max_attempts: u32) -> Self {
        Self::new(rng.gen(), max_attempts)
    }

    /// Where the ship is hidden.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// The number of the try about to be made, starting at 1.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Number of guesses allowed in this round.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The guesses made so far. Drawing this board never shows the ship.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get an iterator over the rows of the board with the ship hidden.
    pub fn iter_board<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        self.board.iter_board(None)
    }

    /// Evaluate a guess. A guess on the ship wins regardless of how many tries were
    /// used. A miss uses up the try; once the try counter passes the maximum the round
    /// is lost on that same guess.
    pub fn guess(mut self, coord: Coordinate) -> Turn {
        let hit = coord == self.target;
        self.board.record_guess(coord, hit);
        trace!(guess = %coord, attempt = self.attempt, hit, "guess evaluated");

        if hit {
            return Turn::Over(self.finish(Outcome::Won));
        }
        self.attempt += 1;
        if self.attempt > self.max_attempts {
            return Turn::Over(self.finish(Outcome::Lost));
        }
        Turn::Continue(self)
    }

    fn finish(self, outcome: Outcome) -> Finished {
        debug!(?outcome, guesses = self.board.guesses(), "round over");
        Finished {
            outcome,
            target: self.target,
            board: self.board,
        }
    }
}

/// A round that has ended.
#[derive(Debug, Clone)]
pub struct Finished {
    /// How the round ended.
    outcome: Outcome,

    /// Where the ship was.
    target: Coordinate,

    /// Every guess made in the round.
    board: Board,
}

impl Finished {
    /// How the round ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Where the ship was.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Every guess made in the round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get an iterator over the rows of the final board. The ship is revealed only if
    /// the round was lost.
    pub fn iter_board<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        let reveal = match self.outcome {
            Outcome::Lost => Some(self.target),
            Outcome::Won => None,
        };
        self.board.iter_board(reveal)
    }
}
