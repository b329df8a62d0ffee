//! Self-play: two searches playing a full game against each other.
//!
//! Used to exercise rule engines end to end and to compare search
//! settings (depth, pruning) between the two sides.

pub mod record;
pub mod runner;

pub use record::{GameRecord, Outcome, PlyRecord};
pub use runner::{SelfPlayConfig, SelfPlayWorker};
