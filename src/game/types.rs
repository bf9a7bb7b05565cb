//! Core domain types: players, cells, and the variable-size board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves on even plies, so X always opens).
    X,
    /// Player O (moves on odd plies).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Board side length, kept inside the supported range.
///
/// Boards of side 3 and 4 play three-in-a-row; 5x5 and larger play
/// four-in-a-row. The required run length is always derived from the
/// size, never stored on its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: usize = 3;
    /// Largest supported side length.
    pub const MAX: usize = 7;

    /// Creates a board size, clamping the value into `[MIN, MAX]`.
    pub fn clamped(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Run length required to win: three on small boards, four from 5x5 up.
    pub fn win_length(self) -> usize {
        if self.0 >= 5 { 4 } else { 3 }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Square board of `size * size` cells.
///
/// Cells are stored in row-major order: `(row, col)` lives at
/// `row * size + col`. Boards are cheap to clone; the match engine keeps
/// one snapshot per ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a blank board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// The board's side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size.get() + col
    }

    /// Gets the cell at `pos`, or `None` when out of range.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Sets the cell at `pos`; out-of-range positions are ignored.
    pub fn set(&mut self, pos: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(pos) {
            *slot = cell;
        }
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Checks if no mark has been placed yet.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
