//! The capability contract a game state must provide to be searchable.
//!
//! Games implement `GamePosition` to define:
//! - Which moves are legal, in a fixed order
//! - How a move mutates the position, and how to take it back
//! - A static evaluation and a terminal test
//!
//! The search engine mutates one position in place for the whole tree
//! (apply → recurse → undo), so `undo_move` must be an exact inverse of
//! `apply_move`.

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, Move, MoveBuffer, Player, Score};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side won.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Searchable two-player, zero-sum, perfect-information position.
///
/// ## Implementation Notes
///
/// - `generate_moves`: same position ⇒ same move order; the search breaks
///   ties by enumeration order
/// - `apply_move` / `undo_move`: always called in LIFO pairs with the same
///   move during search
/// - `evaluate`: must stay strictly inside `±SCORE_INFINITY`
/// - `MAX_MOVES`: must bound the legal move count of every position
pub trait GamePosition {
    /// Largest number of legal moves any position of this game can have.
    ///
    /// The search sizes its per-ply move buffers from this value.
    const MAX_MOVES: usize;

    /// Static heuristic value; positive favours the maximizer.
    fn evaluate(&self) -> Score;

    /// Enumerate the legal moves for the side to move.
    ///
    /// Clears `moves`, fills it and returns the count.
    fn generate_moves(&self, moves: &mut MoveBuffer) -> EngineResult<usize>;

    /// Play `mv` in place, recording what is needed to undo it.
    ///
    /// May leave the same side to move (multi-step turns).
    fn apply_move(&mut self, mv: Move) -> EngineResult<()>;

    /// Take back the most recent `apply_move(mv)`.
    ///
    /// Does nothing when there is nothing to undo.
    fn undo_move(&mut self, mv: Move);

    /// True when the side to move cannot usefully continue.
    fn is_terminal(&self) -> bool;

    /// The side to move.
    fn current_player(&self) -> Player;

    // === Optional capabilities ===

    /// A known best move that makes searching unnecessary.
    fn optimal_opening_move(&mut self) -> Option<Move> {
        None
    }

    /// Free undo slots left, for positions with a bounded undo stack.
    ///
    /// `None` means undo depth is unbounded.
    fn undo_headroom(&self) -> Option<usize> {
        None
    }

    /// Commit a move during real play.
    ///
    /// Unlike `apply_move`, the move is not expected to be taken back.
    fn play_move(&mut self, mv: Move) -> EngineResult<()> {
        self.apply_move(mv)
    }

    /// Final result once the position is terminal.
    ///
    /// Default implementation reads the sign of `evaluate`.
    fn result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.evaluate().signum() {
            1 => GameResult::Winner(Player::Maximizer),
            -1 => GameResult::Winner(Player::Minimizer),
            _ => GameResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter game: each move adds `to` to the total, game ends at 3 plies.
    struct Counter {
        total: i32,
        plies: Vec<Move>,
    }

    impl GamePosition for Counter {
        const MAX_MOVES: usize = 2;

        fn evaluate(&self) -> Score {
            self.total
        }

        fn generate_moves(&self, moves: &mut MoveBuffer) -> EngineResult<usize> {
            moves.clear();
            moves.push(Move::place(1))?;
            moves.push(Move::place(2))?;
            Ok(moves.len())
        }

        fn apply_move(&mut self, mv: Move) -> EngineResult<()> {
            self.total += i32::from(mv.to) * self.current_player().sign();
            self.plies.push(mv);
            Ok(())
        }

        fn undo_move(&mut self, mv: Move) {
            if self.plies.pop().is_some() {
                self.total -= i32::from(mv.to) * self.current_player().sign();
            }
        }

        fn is_terminal(&self) -> bool {
            self.plies.len() >= 3
        }

        fn current_player(&self) -> Player {
            if self.plies.len() % 2 == 0 {
                Player::Maximizer
            } else {
                Player::Minimizer
            }
        }
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Minimizer);
        assert!(!result.is_winner(Player::Maximizer));
        assert!(result.is_winner(Player::Minimizer));

        assert!(!GameResult::Draw.is_winner(Player::Maximizer));
    }

    #[test]
    fn test_default_result_reads_evaluation_sign() {
        let mut game = Counter { total: 0, plies: Vec::new() };
        assert_eq!(game.result(), None);

        game.play_move(Move::place(2)).unwrap();
        game.play_move(Move::place(1)).unwrap();
        game.play_move(Move::place(1)).unwrap();

        assert_eq!(game.total, 2);
        assert_eq!(game.result(), Some(GameResult::Winner(Player::Maximizer)));
    }

    #[test]
    fn test_default_optional_capabilities() {
        let mut game = Counter { total: 0, plies: Vec::new() };
        assert_eq!(game.optimal_opening_move(), None);
        assert_eq!(game.undo_headroom(), None);
    }
}
