//! Core minimax search with alpha-beta pruning.
//!
//! The whole tree is explored by mutating one position in place:
//! apply a move, recurse, undo it. No position is ever copied and every
//! ply reuses a move buffer allocated when the search was created, so the
//! memory cost of a search is fixed by its depth.

use std::marker::PhantomData;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    EngineError, EngineResult, Move, MoveBuffer, Resource, Score, SCORE_INFINITY,
    SCORE_NEG_INFINITY,
};
use crate::rules::GamePosition;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Where the chosen move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    /// The position's opening book answered; no tree was searched.
    OpeningBook,
    /// Found by tree search.
    Search,
}

/// The answer of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Move judged best for the side to move.
    pub best_move: Move,
    /// Backed-up score of that move (static score for book moves).
    pub score: Score,
    /// Book or search.
    pub source: MoveSource,
}

/// Depth-limited minimax search over any [`GamePosition`].
///
/// Owns one move buffer per ply, sized from `G::MAX_MOVES`, so buffer
/// capacity is settled when the search is built.
///
/// ## Example
///
/// ```
/// use pocket_minimax::games::checkers::CheckersGame;
/// use pocket_minimax::rules::GamePosition;
/// use pocket_minimax::search::{MinimaxSearch, SearchConfig};
///
/// let mut game = CheckersGame::new();
/// let mut search = MinimaxSearch::new(SearchConfig::new().with_max_depth(4)).unwrap();
///
/// let outcome = search.find_best_move(&mut game).unwrap();
/// game.play_move(outcome.best_move).unwrap();
/// ```
pub struct MinimaxSearch<G: GamePosition> {
    /// Search configuration.
    config: SearchConfig,

    /// Move buffer per ply, index 0 is the root.
    buffers: Vec<MoveBuffer>,

    /// Statistics of the last search.
    stats: SearchStats,

    _game: PhantomData<fn(&mut G)>,
}

impl<G: GamePosition> MinimaxSearch<G> {
    /// Create a search, allocating all of its move buffers.
    pub fn new(config: SearchConfig) -> EngineResult<Self> {
        config.validate()?;

        let buffers = (0..config.max_depth)
            .map(|_| MoveBuffer::with_capacity(G::MAX_MOVES))
            .collect();

        Ok(Self {
            config,
            buffers,
            stats: SearchStats::default(),
            _game: PhantomData,
        })
    }

    /// Find the best move for the side to move.
    ///
    /// The position is mutated during the search and restored before this
    /// returns. Callers should check `is_terminal` first; a position without
    /// legal moves yields [`EngineError::NoLegalMoves`].
    pub fn find_best_move(&mut self, position: &mut G) -> EngineResult<SearchOutcome> {
        let start = Instant::now();
        self.stats.reset();

        if let Some(best_move) = position.optimal_opening_move() {
            debug!(best = %best_move, "opening book move");
            return Ok(SearchOutcome {
                best_move,
                score: position.evaluate(),
                source: MoveSource::OpeningBook,
            });
        }

        if let Some(headroom) = position.undo_headroom() {
            if usize::from(self.config.max_depth) > headroom {
                warn!(
                    depth = self.config.max_depth,
                    headroom, "undo stack too small for search depth"
                );
                return Err(EngineError::CapacityExceeded {
                    resource: Resource::UndoStack,
                    capacity: headroom,
                });
            }
        }

        let maximizing = position.current_player().is_maximizer();
        let mut alpha = SCORE_NEG_INFINITY;
        let mut beta = SCORE_INFINITY;
        let mut best_score = if maximizing {
            SCORE_NEG_INFINITY
        } else {
            SCORE_INFINITY
        };

        let count = position.generate_moves(&mut self.buffers[0])?;
        if count == 0 {
            return Err(EngineError::NoLegalMoves);
        }
        let mut best_move = self.buffers[0][0];

        for i in 0..count {
            let mv = self.buffers[0][i];

            position.apply_move(mv)?;
            let score = self.minimax(
                position,
                1,
                self.config.max_depth - 1,
                alpha,
                beta,
                !maximizing,
            );
            position.undo_move(mv);
            let score = score?;

            trace!(mv = %mv, score, "root move");

            // Strict comparison: the earliest move wins ties.
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(score);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best = %best_move,
            score = best_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            source: MoveSource::Search,
        })
    }

    /// Recursive minimax below the root.
    ///
    /// `ply` selects the move buffer; `ply + depth` always equals the
    /// configured depth, so a node that generates moves has `ply < max_depth`.
    fn minimax(
        &mut self,
        position: &mut G,
        ply: u8,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> EngineResult<Score> {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || position.is_terminal() {
            self.stats.evaluations += 1;
            return Ok(position.evaluate());
        }

        let slot = usize::from(ply);
        let count = position.generate_moves(&mut self.buffers[slot])?;
        let mut best = if maximizing {
            SCORE_NEG_INFINITY
        } else {
            SCORE_INFINITY
        };

        for i in 0..count {
            let mv = self.buffers[slot][i];

            position.apply_move(mv)?;
            let score = self.minimax(position, ply + 1, depth - 1, alpha, beta, !maximizing);
            // Undo before anything else, including error propagation and cutoffs.
            position.undo_move(mv);
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
