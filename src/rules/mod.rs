//! Game position trait for rule engine implementations.
//!
//! Games implement `GamePosition` to define:
//! - Legal moves for the side to move
//! - How moves modify the position, and how they are taken back
//! - Static evaluation and terminal conditions
//!
//! The search engine calls into `GamePosition` but never interprets
//! game-specific concepts directly.

pub mod position;

pub use position::{GamePosition, GameResult};
