//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the root (must be at least 1).
    /// Each ply costs one move buffer and one undo slot.
    pub max_depth: u8,

    /// Alpha-beta cutoffs on/off.
    /// Turning them off gives plain minimax with the same result, only slower.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_depth == 0 {
            return Err(EngineError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
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
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 4);
        assert!(config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::new().with_max_depth(7).with_pruning(false);
        assert_eq!(config.max_depth, 7);
        assert!(!config.pruning);
    }

    #[test]
    fn test_config_rejects_zero_depth() {
        let err = SearchConfig::new().with_max_depth(0).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = SearchConfig::new().with_max_depth(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
