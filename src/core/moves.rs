//! Move representation and the fixed-capacity move buffer.
//!
//! A move is a pair of cell indices. Games decide what the indices mean:
//! checkers uses the 32 playable dark cells, tic-tac-toe places a mark with
//! `from == to`.
//!
//! [`MoveBuffer`] is the caller-provided storage that `generate_moves` fills.
//! The search engine owns one buffer per ply, allocated once, so no node of
//! the search tree allocates.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, EngineResult, Resource};

/// Moves stored inline before a buffer would need the heap.
///
/// Rounded up from the largest checkers move list (12 kings with 4 steps
/// each) to a size `smallvec` provides an array impl for.
pub const INLINE_MOVES: usize = 64;

/// A move from one cell index to another.
///
/// ## Example
///
/// ```
/// use pocket_minimax::core::Move;
///
/// let step = Move::new(9, 13);
/// assert_eq!(step.reversed(), Move::new(13, 9));
///
/// let mark = Move::place(4);
/// assert!(mark.is_placement());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin cell.
    pub from: u8,
    /// Destination cell.
    pub to: u8,
}

impl Move {
    /// Create a move between two cells.
    #[must_use]
    pub const fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    /// Create a placement move (`from == to`).
    #[must_use]
    pub const fn place(cell: u8) -> Self {
        Self { from: cell, to: cell }
    }

    /// The same move with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// True when this move places at a single cell.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Legal move storage with a hard capacity.
///
/// Pushing past the capacity returns [`EngineError::CapacityExceeded`]
/// instead of growing. The inline `SmallVec` storage keeps typical buffers
/// off the heap entirely.
#[derive(Clone, Debug)]
pub struct MoveBuffer {
    moves: SmallVec<[Move; INLINE_MOVES]>,
    capacity: usize,
}

impl MoveBuffer {
    /// Create an empty buffer that holds at most `capacity` moves.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: SmallVec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of moves this buffer accepts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) -> EngineResult<()> {
        if self.moves.len() >= self.capacity {
            return Err(EngineError::CapacityExceeded {
                resource: Resource::MoveBuffer,
                capacity: self.capacity,
            });
        }
        self.moves.push(mv);
        Ok(())
    }

    /// Remove all moves, keeping the storage.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Keep only the moves matching the predicate, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(|mv| keep(mv));
    }

    /// The moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl Deref for MoveBuffer {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_basics() {
        let mv = Move::new(1, 5);
        assert_eq!(mv.from, 1);
        assert_eq!(mv.to, 5);
        assert!(!mv.is_placement());
        assert_eq!(format!("{}", mv), "1-5");
        assert_eq!(mv.reversed().reversed(), mv);
    }

    #[test]
    fn test_buffer_push_until_full() {
        let mut buffer = MoveBuffer::with_capacity(2);
        buffer.push(Move::new(0, 4)).unwrap();
        buffer.push(Move::new(1, 5)).unwrap();

        let err = buffer.push(Move::new(2, 6)).unwrap_err();
        assert_eq!(
            err,
            EngineError::CapacityExceeded {
                resource: Resource::MoveBuffer,
                capacity: 2,
            }
        );
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_buffer_sized_for_checkers_stays_inline() {
        let mut buffer = MoveBuffer::with_capacity(48);
        for cell in 0..48 {
            buffer.push(Move::new(cell, cell + 4)).unwrap();
        }

        assert_eq!(buffer.len(), 48);
        assert!(!buffer.moves.spilled());
    }

    #[test]
    fn test_buffer_clear_keeps_capacity() {
        let mut buffer = MoveBuffer::with_capacity(3);
        buffer.push(Move::place(4)).unwrap();
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
    }

    #[test]
    fn test_buffer_retain_preserves_order() {
        let mut buffer = MoveBuffer::with_capacity(8);
        for cell in 0..5 {
            buffer.push(Move::place(cell)).unwrap();
        }
        buffer.retain(|mv| mv.to % 2 == 0);

        assert_eq!(
            buffer.as_slice(),
            &[Move::place(0), Move::place(2), Move::place(4)]
        );
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(9, 18);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
