//! Board representation and move rules for the sliding-tile puzzle.
//!
//! The grid is a flat row-major `Vec<u16>` where each cell holds a tile
//! number and 0 marks the blank. A session runs `Ready -> InProgress ->
//! Won`: [`Board::shuffle`] enters `InProgress`, and reaching the solved
//! arrangement through play ends in `Won`.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// A grid coordinate as (row, col).
pub type Cell = (usize, usize);

/// Smallest playable board edge.
pub const MIN_SIZE: usize = 2;

/// Largest supported board edge; keeps every tile number within `u16`.
pub const MAX_SIZE: usize = 256;

/// Shuffle walk length per unit of board size.
const SHUFFLE_STEPS_PER_UNIT: usize = 100;

/// Errors from board construction and move application.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Requested edge length outside the supported range. Sizes are never
    /// clamped; the caller must pick a valid one.
    #[error("board size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}")]
    InvalidSize { size: usize },

    /// The named cell holds no tile that can slide: out of bounds, not
    /// orthogonally adjacent to the blank, or the game is already won.
    #[error("tile at ({row}, {col}) cannot slide into the blank")]
    IllegalMove { row: usize, col: usize },
}

/// Lifecycle of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Freshly built or reset: solved arrangement, nothing played yet.
    Ready,
    /// Shuffled (or first moved) and accepting moves.
    InProgress,
    /// Solved through play. Terminal until [`Board::reset`] or a new board.
    Won,
}

/// An N×N sliding-tile board with move counting and win detection.
///
/// The board never renders, reads input, or keeps time; front-ends pull
/// state out through the accessors and push moves in via [`Board::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<u16>,
    blank: Cell,
    moves: u32,
    state: GameState,
}

impl Board {
    /// Builds a board in the solved arrangement: tiles ascending row-major
    /// with the blank in the last cell.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        let cell_count = size * size;
        let mut tiles: Vec<u16> = (1..cell_count).map(|value| value as u16).collect();
        tiles.push(0);
        Ok(Self {
            size,
            tiles,
            blank: (size - 1, size - 1),
            moves: 0,
            state: GameState::Ready,
        })
    }

    /// Restores the solved arrangement and clears the move count.
    pub fn reset(&mut self) {
        let cell_count = self.size * self.size;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            *tile = if i + 1 == cell_count { 0 } else { (i + 1) as u16 };
        }
        self.blank = (self.size - 1, self.size - 1);
        self.moves = 0;
        self.state = GameState::Ready;
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat row-major view of the grid; 0 is the blank.
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Tile number at (row, col); 0 for the blank.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> u16 {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.tiles[self.idx(row, col)]
    }

    /// Current position of the blank cell.
    pub fn blank(&self) -> Cell {
        self.blank
    }

    /// Legal moves applied since the last shuffle or reset.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// True iff the grid is exactly the solved arrangement.
    pub fn is_won(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// Cells holding a tile that may slide into the blank: the blank's
    /// in-bounds orthogonal neighbors.
    pub fn movable_cells(&self) -> Vec<Cell> {
        let (row, col) = self.blank;
        let mut cells = Vec::with_capacity(4);
        if row > 0 {
            cells.push((row - 1, col));
        }
        if row + 1 < self.size {
            cells.push((row + 1, col));
        }
        if col > 0 {
            cells.push((row, col - 1));
        }
        if col + 1 < self.size {
            cells.push((row, col + 1));
        }
        cells
    }

    /// Randomizes the board with a walk of `100 × size` random legal moves.
    ///
    /// Each step swaps the blank with a uniformly chosen orthogonal
    /// neighbor, so every intermediate arrangement stays reachable from the
    /// solved one and the result is always solvable. Sampling a uniform
    /// permutation instead would be unsolvable half the time.
    ///
    /// The move count resets to 0 and the game enters `InProgress`. Given
    /// the same seeded rng the resulting board is identical.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for _ in 0..SHUFFLE_STEPS_PER_UNIT * self.size {
            let cells = self.movable_cells();
            if let Some(&cell) = cells.choose(rng) {
                self.swap_with_blank(cell);
            }
        }
        self.moves = 0;
        self.state = GameState::InProgress;
    }

    /// Slides the tile at `(row, col)` into the blank.
    ///
    /// Legal iff the cell is in bounds, orthogonally adjacent to the blank,
    /// and the game is not already won; an illegal request leaves the board
    /// completely untouched. A legal move bumps the move count by one and,
    /// when it produces the solved arrangement, transitions to `Won`.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.state == GameState::Won || !self.is_adjacent_to_blank(row, col) {
            return Err(BoardError::IllegalMove { row, col });
        }
        self.swap_with_blank((row, col));
        self.moves += 1;
        self.state = if self.is_won() {
            GameState::Won
        } else {
            GameState::InProgress
        };
        Ok(())
    }

    fn is_adjacent_to_blank(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let (blank_row, blank_col) = self.blank;
        row.abs_diff(blank_row) + col.abs_diff(blank_col) == 1
    }

    /// Moves the tile at `cell` into the blank and re-anchors the blank.
    /// Callers must pass an in-bounds cell adjacent to the blank.
    fn swap_with_blank(&mut self, cell: Cell) {
        let blank_idx = self.idx(self.blank.0, self.blank.1);
        let cell_idx = self.idx(cell.0, cell.1);
        self.tiles.swap(blank_idx, cell_idx);
        self.blank = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let tile = self.tiles[self.idx(row, col)];
                if tile == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, "{tile:>2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
