//! Evaluation scores.

/// Static or backed-up evaluation of a position.
///
/// Positive values favour the maximizer.
pub type Score = i32;

/// Stands in for +infinity in the search window.
///
/// Evaluation functions must stay strictly inside
/// `SCORE_NEG_INFINITY..SCORE_INFINITY`.
pub const SCORE_INFINITY: Score = 32767;

/// Stands in for -infinity in the search window.
pub const SCORE_NEG_INFINITY: Score = -SCORE_INFINITY;
