//! # pocket-minimax
//!
//! Depth-limited minimax search with alpha-beta pruning, plus rule engines
//! for checkers and tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The search only talks to the
//!    `GamePosition` trait. It never interprets boards or pieces.
//!
//! 2. **In-Place Mutation**: One position is mutated and restored across
//!    the whole search tree. `undo_move` is an exact inverse of `apply_move`.
//!
//! 3. **Fixed Memory**: Move buffers and undo stacks have capacities fixed
//!    at configuration time. Overflow is an error, never a reallocation.
//!
//! ## Modules
//!
//! - `core`: Moves, move buffers, players, scores, errors, RNG
//! - `rules`: `GamePosition` trait for game implementations
//! - `search`: Minimax search with alpha-beta pruning
//! - `games`: Checkers and tic-tac-toe
//! - `selfplay`: Engine-versus-engine games

pub mod core;
pub mod games;
pub mod rules;
pub mod search;
pub mod selfplay;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameRng, Move, MoveBuffer, Player, Resource, Score,
    SCORE_INFINITY, SCORE_NEG_INFINITY,
};

pub use crate::rules::{GamePosition, GameResult};

pub use crate::search::{MinimaxSearch, MoveSource, SearchConfig, SearchOutcome, SearchStats};

pub use crate::games::checkers::{CheckersConfig, CheckersGame, ReversalFilter};
pub use crate::games::tictactoe::TicTacToe;

pub use crate::selfplay::{GameRecord, Outcome, PlyRecord, SelfPlayConfig, SelfPlayWorker};
