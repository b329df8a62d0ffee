//! Error type shared by the search engine and the rule engines.
//!
//! Nothing in the crate panics on bad input or exhausted capacity; every
//! failure surfaces as an [`EngineError`]. Capacity errors are configuration
//! bugs (a buffer or undo stack provisioned too small for the requested
//! depth), not conditions to retry.

use thiserror::Error;

use super::moves::Move;

/// A bounded resource whose capacity is fixed at configuration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Per-ply legal move buffer.
    MoveBuffer,
    /// Undo record stack of a position.
    UndoStack,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::MoveBuffer => write!(f, "move buffer"),
            Resource::UndoStack => write!(f, "undo stack"),
        }
    }
}

/// Errors raised by positions, searches and the self-play runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A fixed-capacity resource would have overflowed.
    #[error("{resource} capacity exceeded (capacity {capacity})")]
    CapacityExceeded { resource: Resource, capacity: usize },

    /// The side to move has nothing to play.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A move submitted for real play is not in the legal move list.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// A textual board description could not be parsed.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = EngineError::CapacityExceeded {
            resource: Resource::UndoStack,
            capacity: 64,
        };
        assert_eq!(err.to_string(), "undo stack capacity exceeded (capacity 64)");
    }

    #[test]
    fn test_illegal_move_message() {
        let err = EngineError::IllegalMove(Move::new(9, 18));
        assert_eq!(err.to_string(), "illegal move 9-18");
    }
}
