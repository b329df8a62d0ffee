//! Core engine types: moves, players, scores, errors, RNG.
//!
//! Everything here is game-agnostic. Rule engines build on these types and
//! the search engine consumes nothing else.

pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod score;

pub use error::{EngineError, EngineResult, Resource};
pub use moves::{Move, MoveBuffer, INLINE_MOVES};
pub use player::Player;
pub use rng::GameRng;
pub use score::{Score, SCORE_INFINITY, SCORE_NEG_INFINITY};
