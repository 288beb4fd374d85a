//! Sliding-tile puzzle engine ("game of fifteen", generalized to N×N).
//!
//! Two components make up the crate: [`board::Board`] owns the tile grid,
//! move rules, win detection, and move counting; [`results::ResultStore`]
//! owns the per-size best results and their JSON file. Rendering, input,
//! and timing belong to the front-end: the engine only consumes an
//! externally measured duration when a finished game is offered to the
//! store.

pub mod board;
pub mod results;

pub use board::{Board, BoardError, Cell, GameState};
pub use results::{BestResult, ResultStore, StoreError};
