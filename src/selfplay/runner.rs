//! Engine-versus-engine game loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{EngineError, EngineResult, Player};
use crate::rules::GamePosition;
use crate::search::{MinimaxSearch, SearchConfig};

use super::record::{GameRecord, Outcome, PlyRecord};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Maximum plies per game (to stop endless shuffling).
    pub max_plies: usize,

    /// Search used by the maximizer.
    pub maximizer: SearchConfig,

    /// Search used by the minimizer.
    pub minimizer: SearchConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            maximizer: SearchConfig::default(),
            minimizer: SearchConfig::default(),
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum plies per game.
    #[must_use]
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }

    /// Set the maximizer's search.
    #[must_use]
    pub fn with_maximizer(mut self, config: SearchConfig) -> Self {
        self.maximizer = config;
        self
    }

    /// Set the minimizer's search.
    #[must_use]
    pub fn with_minimizer(mut self, config: SearchConfig) -> Self {
        self.minimizer = config;
        self
    }

    /// Use the same search for both sides.
    #[must_use]
    pub fn with_search(self, config: SearchConfig) -> Self {
        self.with_maximizer(config.clone()).with_minimizer(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_plies == 0 {
            return Err(EngineError::InvalidConfig(
                "max_plies must be at least 1".to_string(),
            ));
        }
        self.maximizer.validate()?;
        self.minimizer.validate()
    }
}

/// Plays games between two minimax searches.
pub struct SelfPlayWorker<G: GamePosition> {
    maximizer: MinimaxSearch<G>,
    minimizer: MinimaxSearch<G>,
    config: SelfPlayConfig,
}

impl<G: GamePosition> SelfPlayWorker<G> {
    /// Create a worker, building both searches.
    pub fn new(config: SelfPlayConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            maximizer: MinimaxSearch::new(config.maximizer.clone())?,
            minimizer: MinimaxSearch::new(config.minimizer.clone())?,
            config,
        })
    }

    /// Play from `position` until it is terminal or the ply limit is hit.
    ///
    /// Moves are committed with `play_move`, so `position` holds the final
    /// position afterwards.
    pub fn play_game(&mut self, position: &mut G) -> EngineResult<GameRecord> {
        let mut record = GameRecord::new();

        for ply in 0..self.config.max_plies {
            if let Some(result) = position.result() {
                record.outcome = Some(Outcome::Finished(result));
                break;
            }

            let player = position.current_player();
            let search = match player {
                Player::Maximizer => &mut self.maximizer,
                Player::Minimizer => &mut self.minimizer,
            };

            let outcome = search.find_best_move(position)?;
            let nodes = search.stats().nodes;
            position.play_move(outcome.best_move)?;

            debug!(ply, %player, mv = %outcome.best_move, score = outcome.score, "ply committed");
            record.push(PlyRecord {
                player,
                mv: outcome.best_move,
                score: outcome.score,
                source: outcome.source,
                nodes,
            });
        }

        // The last committed move may have ended the game.
        let outcome = match record.outcome {
            Some(outcome) => outcome,
            None => position
                .result()
                .map_or(Outcome::PlyLimit, Outcome::Finished),
        };
        record.outcome = Some(outcome);

        info!(
            plies = record.len(),
            nodes = record.total_nodes(),
            outcome = ?outcome,
            "self-play game finished"
        );
        Ok(record)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}
