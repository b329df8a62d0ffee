//! Property-based tests for the rule engines and the search.
//!
//! Positions are generated by random playouts from the starting position,
//! so only reachable positions are tested.

use pocket_minimax::core::Move;
use pocket_minimax::games::checkers::{CheckersConfig, CheckersGame, ReversalFilter};
use pocket_minimax::games::tictactoe::TicTacToe;
use pocket_minimax::rules::GamePosition;
use pocket_minimax::search::{MinimaxSearch, SearchConfig};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Play `choices` (taken modulo the legal move count) from `position`.
fn playout<G: GamePosition>(
    mut position: G,
    choices: &[usize],
    legal: impl Fn(&G) -> Vec<Move>,
) -> G {
    for &choice in choices {
        if position.is_terminal() {
            break;
        }
        let moves = legal(&position);
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        position
            .play_move(mv)
            .expect("generated move should be playable");
    }
    position
}

/// Checkers position after 0-60 random plies.
fn arb_checkers(filter: ReversalFilter) -> impl Strategy<Value = CheckersGame> {
    proptest::collection::vec(0usize..64, 0..60).prop_map(move |choices| {
        let config = CheckersConfig::new().with_reversal_filter(filter);
        let game = CheckersGame::with_config(config).expect("valid config");
        playout(game, &choices, |g| g.legal_moves().expect("buffer large enough"))
    })
}

/// Tic-tac-toe position after 1-8 random plies.
fn arb_tictactoe() -> impl Strategy<Value = TicTacToe> {
    proptest::collection::vec(0usize..9, 1..8)
        .prop_map(|choices| playout(TicTacToe::new(), &choices, TicTacToe::legal_moves))
}

// =============================================================================
// Inverse law
// =============================================================================

proptest! {
    /// apply followed by undo restores every part of the position.
    #[test]
    fn prop_checkers_apply_undo_is_identity(
        game in prop_oneof![
            arb_checkers(ReversalFilter::LastMove),
            arb_checkers(ReversalFilter::OwnMove),
            arb_checkers(ReversalFilter::Off),
        ]
    ) {
        let mut position = game.clone();
        for mv in game.legal_moves().expect("buffer large enough") {
            position.apply_move(mv).expect("undo stack has room");
            position.undo_move(mv);
            prop_assert_eq!(&position, &game, "move {} not undone exactly", mv);
        }
    }

    /// Two-ply apply/undo pairs nest correctly, including multi-jumps.
    #[test]
    fn prop_checkers_nested_undo(game in arb_checkers(ReversalFilter::OwnMove), pick in 0usize..64) {
        let mut position = game.clone();
        let moves = game.legal_moves().expect("buffer large enough");
        prop_assume!(!moves.is_empty());

        let first = moves[pick % moves.len()];
        position.apply_move(first).expect("undo stack has room");
        let after_first = position.clone();

        for reply in after_first.legal_moves().expect("buffer large enough") {
            position.apply_move(reply).expect("undo stack has room");
            position.undo_move(reply);
            prop_assert_eq!(&position, &after_first);
        }

        position.undo_move(first);
        prop_assert_eq!(&position, &game);
    }

    #[test]
    fn prop_tictactoe_apply_undo_is_identity(game in arb_tictactoe()) {
        let mut position = game.clone();
        for mv in game.legal_moves() {
            position.apply_move(mv).expect("empty cell");
            position.undo_move(mv);
            prop_assert_eq!(position.cells(), game.cells());
            prop_assert_eq!(position.to_move(), game.to_move());
        }
    }
}

// =============================================================================
// Pruning equivalence
// =============================================================================

fn compare_pruning<G: GamePosition + Clone>(game: &G, depth: u8) -> Result<(), TestCaseError> {
    let config = SearchConfig::new().with_max_depth(depth);
    let mut pruned =
        MinimaxSearch::<G>::new(config.clone().with_pruning(true)).expect("valid config");
    let mut plain = MinimaxSearch::<G>::new(config.with_pruning(false)).expect("valid config");

    let mut a = game.clone();
    let mut b = game.clone();
    let with_pruning = pruned.find_best_move(&mut a);
    let without_pruning = plain.find_best_move(&mut b);

    prop_assert_eq!(with_pruning, without_pruning);
    prop_assert!(pruned.stats().nodes <= plain.stats().nodes);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Alpha-beta returns the same move and score as plain minimax.
    #[test]
    fn prop_checkers_pruning_is_transparent(game in arb_checkers(ReversalFilter::OwnMove), depth in 1u8..=4) {
        prop_assume!(!game.is_terminal());
        compare_pruning(&game, depth)?;
    }

    #[test]
    fn prop_tictactoe_pruning_is_transparent(game in arb_tictactoe(), depth in 1u8..=6) {
        prop_assume!(!game.is_terminal());
        compare_pruning(&game, depth)?;
    }

    /// Searching leaves the position exactly as it was.
    #[test]
    fn prop_search_restores_checkers_position(game in arb_checkers(ReversalFilter::OwnMove), depth in 1u8..=4) {
        prop_assume!(!game.is_terminal());
        let mut position = game.clone();
        let mut search = MinimaxSearch::<CheckersGame>::new(
            SearchConfig::new().with_max_depth(depth),
        )
        .expect("valid config");

        let outcome = search.find_best_move(&mut position).expect("legal moves exist");
        prop_assert_eq!(&position, &game);
        prop_assert!(game.legal_moves().expect("buffer large enough").contains(&outcome.best_move));
    }
}
