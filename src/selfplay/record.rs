//! Records of finished self-play games.
//!
//! A record keeps every committed move together with the search that
//! produced it, so games can be replayed, inspected or stored as JSON.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player, Score};
use crate::rules::GameResult;
use crate::search::MoveSource;

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// Side that moved.
    pub player: Player,

    /// The move played.
    pub mv: Move,

    /// Score the search gave the move.
    pub score: Score,

    /// Book or search.
    pub source: MoveSource,

    /// Nodes visited to find it (0 for book moves).
    pub nodes: u64,
}

/// How a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The position became terminal.
    Finished(GameResult),
    /// The ply limit ran out first.
    PlyLimit,
}

/// A complete self-play game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// All committed moves in order.
    pub plies: Vec<PlyRecord>,

    /// Final outcome, `None` while the game is being played.
    pub outcome: Option<Outcome>,
}

impl GameRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ply.
    pub fn push(&mut self, ply: PlyRecord) {
        self.plies.push(ply);
    }

    /// Number of plies.
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// The winner, if the game finished with one.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(Outcome::Finished(GameResult::Winner(player))) => Some(player),
            _ => None,
        }
    }

    /// Plies made by one side.
    pub fn player_plies(&self, player: Player) -> impl Iterator<Item = &PlyRecord> {
        self.plies.iter().filter(move |ply| ply.player == player)
    }

    /// Total nodes searched over the game.
    pub fn total_nodes(&self) -> u64 {
        self.plies.iter().map(|ply| ply.nodes).sum()
    }
}
