//! Depth-limited minimax search with alpha-beta pruning.
//!
//! ## Overview
//!
//! The search works on any type implementing
//! [`GamePosition`](crate::rules::GamePosition). Key properties:
//!
//! - **In-place**: one position is mutated and restored, never copied
//! - **Fixed memory**: one move buffer per ply, allocated at construction
//! - **Deterministic**: ties go to the earliest enumerated move
//! - **Pruning is transparent**: alpha-beta never changes the chosen move
//!   or its score, only how many nodes are visited
//!
//! ## Usage
//!
//! ```rust
//! use pocket_minimax::games::tictactoe::TicTacToe;
//! use pocket_minimax::search::{MinimaxSearch, MoveSource, SearchConfig};
//!
//! let mut game = TicTacToe::new();
//! let mut search = MinimaxSearch::new(SearchConfig::new().with_max_depth(3)).unwrap();
//!
//! // Empty board: the opening book answers without searching.
//! let outcome = search.find_best_move(&mut game).unwrap();
//! assert_eq!(outcome.source, MoveSource::OpeningBook);
//! assert_eq!(outcome.best_move.to, 4);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{MinimaxSearch, MoveSource, SearchOutcome};
pub use stats::SearchStats;
