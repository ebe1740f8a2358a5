//! The record of guesses made during a round.

use crate::coordinate::{Coordinate, GRID_SIZE};

/// A single cell in the grid.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
struct GridCell {
    /// Whether a guess has landed on this cell.
    guessed: bool,

    /// Whether the most recent guess on this cell matched the target.
    hit: bool,
}

/// What a cell looks like when the board is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Nothing known about this cell.
    Empty,
    /// A guess landed here and missed.
    Miss,
    /// A guess landed here and found the ship.
    Hit,
    /// The ship is here. Only produced when the target is explicitly revealed.
    Ship,
}

/// Tracks which cells have been guessed in the current round and whether each guess was a
/// hit. Guesses are never removed; start a new board for a new round.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells in scan order.
    cells: Box<[GridCell]>,

    /// Total guesses recorded, counting repeats.
    guesses: usize,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        let size = usize::from(GRID_SIZE) * usize::from(GRID_SIZE);
        Self {
            cells: vec![GridCell::default(); size].into_boxed_slice(),
            guesses: 0,
        }
    }

    /// Store the outcome of a guess. Guessing the same cell again is allowed and replaces
    /// the previous outcome.
    pub fn record_guess(&mut self, coord: Coordinate, hit: bool) {
        let cell = &mut self.cells[coord.index()];
        cell.guessed = true;
        cell.hit = hit;
        self.guesses += 1;
    }

    /// Returns true only if the cell was recorded as a hit.
    pub fn is_hit_at(&self, coord: Coordinate) -> bool {
        self.cells[coord.index()].hit
    }

    /// Returns true if any guess has landed on the cell.
    pub fn is_guessed(&self, coord: Coordinate) -> bool {
        self.cells[coord.index()].guessed
    }

    /// Number of guesses recorded, including repeated guesses of the same cell.
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Returns true if nothing has been guessed yet.
    pub fn is_empty(&self) -> bool {
        self.guesses == 0
    }

    /// Get how the given cell should be drawn. The target is only shown when `reveal` is
    /// given, and never over a cell that was hit.
    pub fn cell(&self, coord: Coordinate, reveal: Option<Coordinate>) -> Cell {
        let cell = self.cells[coord.index()];
        match cell {
            GridCell { hit: true, .. } => Cell::Hit,
            _ if reveal == Some(coord) => Cell::Ship,
            GridCell { guessed: true, .. } => Cell::Miss,
            _ => Cell::Empty,
        }
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row. Rows run top to bottom along `y`, cells left to right
    /// along `x`.
    pub fn iter_board<'a>(
        &'a self,
        reveal: Option<Coordinate>,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        Coordinate::rows().map(move |row| row.map(move |coord| self.cell(coord, reveal)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
