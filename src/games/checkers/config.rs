//! Checkers engine configuration.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// Which move, if any, the anti-reversal heuristic refuses to undo.
///
/// The filter is a shuffling deterrent, not a rule of checkers. It never
/// removes the only legal move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReversalFilter {
    /// Generate the full legal move list.
    Off,
    /// Drop the move that reverses the last turn-ending move on the board.
    #[default]
    LastMove,
    /// Drop the move that reverses the side to move's own previous
    /// turn-ending move.
    OwnMove,
}

/// Capacities and heuristics of a [`CheckersGame`](super::CheckersGame).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersConfig {
    /// Undo records kept at once. Bounds the deepest search the game allows.
    pub undo_capacity: usize,

    /// Position fingerprints kept for repetition scoring.
    /// Once full, search stops recording; played moves evict the oldest.
    pub history_capacity: usize,

    /// Anti-reversal heuristic applied after move generation.
    pub reversal_filter: ReversalFilter,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            undo_capacity: 64,
            history_capacity: 32,
            reversal_filter: ReversalFilter::LastMove,
        }
    }
}

impl CheckersConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the undo stack capacity.
    #[must_use]
    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.undo_capacity = capacity;
        self
    }

    /// Set the fingerprint history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Choose the anti-reversal heuristic.
    #[must_use]
    pub fn with_reversal_filter(mut self, filter: ReversalFilter) -> Self {
        self.reversal_filter = filter;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.undo_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "undo_capacity must be at least 1".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CheckersConfig::default();
        assert_eq!(config.undo_capacity, 64);
        assert_eq!(config.history_capacity, 32);
        assert_eq!(config.reversal_filter, ReversalFilter::LastMove);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(CheckersConfig::new().with_undo_capacity(0).validate().is_err());
        assert!(CheckersConfig::new().with_history_capacity(0).validate().is_err());
        assert!(CheckersConfig::new()
            .with_reversal_filter(ReversalFilter::Off)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = CheckersConfig::new()
            .with_undo_capacity(16)
            .with_reversal_filter(ReversalFilter::OwnMove);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CheckersConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
