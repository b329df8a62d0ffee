//! Player orientation for two-player zero-sum search.
//!
//! ## Player
//!
//! Every searchable game has exactly two sides. One of them is the
//! *maximizer* (scores above zero favour it), the other the *minimizer*.
//! Games map their own side names onto this pair; the search engine never
//! sees anything else.

use serde::{Deserialize, Serialize};

/// Which side of a two-player game is to move, from the search's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Positive scores favour this side.
    Maximizer,
    /// Negative scores favour this side.
    Minimizer,
}

impl Player {
    /// The `+1` / `-1` orientation value.
    ///
    /// ```
    /// use pocket_minimax::core::Player;
    ///
    /// assert_eq!(Player::Maximizer.sign(), 1);
    /// assert_eq!(Player::Minimizer.sign(), -1);
    /// ```
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Player::Maximizer => 1,
            Player::Minimizer => -1,
        }
    }

    /// True for the maximizing side.
    #[inline]
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::Maximizer)
    }

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Maximizer => write!(f, "Maximizer"),
            Player::Minimizer => write!(f, "Minimizer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_sign_is_opposite_for_opponent() {
        for player in [Player::Maximizer, Player::Minimizer] {
            assert_eq!(player.sign(), -player.opponent().sign());
        }
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Maximizer.opponent(), Player::Minimizer);
        assert_eq!(Player::Minimizer.opponent(), Player::Maximizer);
        assert!(Player::Maximizer.is_maximizer());
        assert!(!Player::Minimizer.is_maximizer());
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::Maximizer), "Maximizer");
        assert_eq!(format!("{}", Player::Minimizer), "Minimizer");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Minimizer).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Minimizer);
    }
}
