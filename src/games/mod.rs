//! Game implementations.
//!
//! Each game implements [`GamePosition`](crate::rules::GamePosition) and can
//! be searched directly.

pub mod checkers;
pub mod tictactoe;
