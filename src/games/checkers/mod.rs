//! 8×8 checkers (English draughts rules as played by the engine).
//!
//! - Men move diagonally forward one cell, kings in all four directions
//! - Captures are forced; a jump that can continue keeps the turn, and only
//!   the jumping piece may continue
//! - A man reaching the far row is crowned
//! - Evaluation is material plus advancement, minus a penalty for
//!   positions repeated in the recent history
//!
//! Black moves first and plays the maximizer.

mod board;
mod config;
mod game;
pub mod movegen;

pub use board::{coord_to_index, index_to_coord, Board, Cell, Rank, Side, BOARD_SIZE, NUM_CELLS};
pub use config::{CheckersConfig, ReversalFilter};
pub use game::{CheckersGame, REPETITION_PENALTY};
