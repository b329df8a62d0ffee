//! Checkers position with in-place apply and exact undo.

use crate::core::{EngineError, EngineResult, Move, MoveBuffer, Player, Resource, Score};
use crate::rules::{GamePosition, GameResult};

use super::board::{index_to_coord, Board, Cell, Rank, Side};
use super::config::{CheckersConfig, ReversalFilter};
use super::movegen;

/// Points subtracted per repeated occurrence of the current position.
pub const REPETITION_PENALTY: Score = 10;

/// Everything `undo_move` needs that the move itself does not carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct UndoRecord {
    /// Jumped cell and the piece that stood there.
    captured: Option<(u8, Cell)>,
    /// The man before it was crowned.
    promoted_from: Option<Cell>,
    turn_switched: bool,
    /// Turn-ending markers before the move.
    previous_last_move: Option<Move>,
    previous_own_move: Option<Move>,
    previous_pending: Option<u8>,
    /// A fingerprint was pushed and must be popped.
    history_recorded: bool,
}

/// Full checkers position: board, side to move, last turn-ending moves,
/// multi-jump state, undo stack and fingerprint history.
///
/// ## Example
///
/// ```
/// use pocket_minimax::core::Move;
/// use pocket_minimax::games::checkers::{CheckersGame, Side};
/// use pocket_minimax::rules::GamePosition;
///
/// let mut game = CheckersGame::new();
/// let before = game.clone();
///
/// game.apply_move(Move::new(9, 13)).unwrap();
/// assert_eq!(game.side_to_move(), Side::White);
///
/// game.undo_move(Move::new(9, 13));
/// assert_eq!(game, before);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckersGame {
    config: CheckersConfig,
    board: Board,
    side_to_move: Side,
    /// Most recent turn-ending move.
    last_move: Option<Move>,
    /// The turn-ending move before `last_move`, made by the side to move.
    own_move: Option<Move>,
    /// Piece that must keep jumping before the turn can end.
    pending_jumper: Option<u8>,
    undo_stack: Vec<UndoRecord>,
    history: Vec<u16>,
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckersGame {
    /// Standard starting position with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Board::starting(), Side::Black, CheckersConfig::default())
    }

    /// Standard starting position with a custom configuration.
    pub fn with_config(config: CheckersConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(Board::starting(), Side::Black, config))
    }

    /// Arbitrary position, for analysis and tests.
    pub fn from_board(
        board: Board,
        side_to_move: Side,
        config: CheckersConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(board, side_to_move, config))
    }

    fn build(board: Board, side_to_move: Side, config: CheckersConfig) -> Self {
        let mut game = Self {
            undo_stack: Vec::with_capacity(config.undo_capacity),
            history: Vec::with_capacity(config.history_capacity),
            config,
            board,
            side_to_move,
            last_move: None,
            own_move: None,
            pending_jumper: None,
        };
        game.history.push(game.board.fingerprint());
        game
    }

    /// Back to the starting layout, discarding history and undo state.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.side_to_move = Side::Black;
        self.last_move = None;
        self.own_move = None;
        self.pending_jumper = None;
        self.undo_stack.clear();
        self.history.clear();
        self.history.push(self.board.fingerprint());
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[must_use]
    pub fn config(&self) -> &CheckersConfig {
        &self.config
    }

    /// Most recent move that ended a turn.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The side to move's own previous turn-ending move.
    #[must_use]
    pub fn own_last_move(&self) -> Option<Move> {
        self.own_move
    }

    /// Piece in the middle of a multi-jump, if any.
    #[must_use]
    pub fn pending_jumper(&self) -> Option<u8> {
        self.pending_jumper
    }

    /// Undo records currently held.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Recorded fingerprints, oldest first.
    #[must_use]
    pub fn history(&self) -> &[u16] {
        &self.history
    }

    /// How often the current position's fingerprint appears in history.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let current = self.board.fingerprint();
        self.history.iter().filter(|&&hash| hash == current).count()
    }

    /// Legal moves in generation order.
    pub fn legal_moves(&self) -> EngineResult<Vec<Move>> {
        let mut moves = MoveBuffer::with_capacity(Self::MAX_MOVES);
        self.generate_moves(&mut moves)?;
        Ok(moves.to_vec())
    }
}

impl GamePosition for CheckersGame {
    /// Twelve kings with four steps each.
    const MAX_MOVES: usize = 48;

    fn evaluate(&self) -> Score {
        let mut score = self.board.material();
        let repeats = self.repetitions();
        if repeats > 1 {
            score -= REPETITION_PENALTY * (repeats as Score - 1);
        }
        score
    }

    fn generate_moves(&self, moves: &mut MoveBuffer) -> EngineResult<usize> {
        movegen::generate(&self.board, self.side_to_move, self.pending_jumper, moves)?;
        let marker = match self.config.reversal_filter {
            ReversalFilter::Off => None,
            ReversalFilter::LastMove => self.last_move,
            ReversalFilter::OwnMove => self.own_move,
        };
        if let Some(last) = marker {
            movegen::filter_reversal(moves, last);
        }
        Ok(moves.len())
    }

    fn apply_move(&mut self, mv: Move) -> EngineResult<()> {
        if self.undo_stack.len() >= self.config.undo_capacity {
            return Err(EngineError::CapacityExceeded {
                resource: Resource::UndoStack,
                capacity: self.config.undo_capacity,
            });
        }

        let side = self.side_to_move;
        let piece = self.board.get(mv.from);

        let captured = movegen::jumped_cell(mv).map(|cell| (cell, self.board.get(cell)));
        if let Some((cell, _)) = captured {
            self.board.set(cell, Cell::Empty);
        }

        self.board.set(mv.to, piece);
        self.board.set(mv.from, Cell::Empty);

        let (to_row, _) = index_to_coord(mv.to);
        let promoted_from = if piece.rank() == Some(Rank::Man) && to_row == side.promotion_row() {
            self.board.set(mv.to, piece.crowned());
            Some(piece)
        } else {
            None
        };

        let mut record = UndoRecord {
            captured,
            promoted_from,
            turn_switched: false,
            previous_last_move: self.last_move,
            previous_own_move: self.own_move,
            previous_pending: self.pending_jumper,
            history_recorded: false,
        };

        if captured.is_some() && movegen::can_capture(&self.board, mv.to) {
            self.pending_jumper = Some(mv.to);
        } else {
            record.turn_switched = true;
            self.pending_jumper = None;
            self.own_move = self.last_move;
            self.last_move = Some(mv);
            self.side_to_move = side.opponent();

            if self.history.len() < self.config.history_capacity {
                self.history.push(self.board.fingerprint());
                record.history_recorded = true;
            }
        }

        self.undo_stack.push(record);
        Ok(())
    }

    fn undo_move(&mut self, mv: Move) {
        let Some(record) = self.undo_stack.pop() else {
            return;
        };

        if record.turn_switched {
            self.side_to_move = self.side_to_move.opponent();
        }
        if record.history_recorded {
            self.history.pop();
        }

        let piece = record.promoted_from.unwrap_or_else(|| self.board.get(mv.to));
        self.board.set(mv.from, piece);
        self.board.set(mv.to, Cell::Empty);
        if let Some((cell, captured)) = record.captured {
            self.board.set(cell, captured);
        }

        self.last_move = record.previous_last_move;
        self.own_move = record.previous_own_move;
        self.pending_jumper = record.previous_pending;
    }

    fn is_terminal(&self) -> bool {
        self.board.count(Side::Black) == 0
            || self.board.count(Side::White) == 0
            || !movegen::has_any_move(&self.board, self.side_to_move, self.pending_jumper)
    }

    fn current_player(&self) -> Player {
        self.side_to_move.player()
    }

    fn undo_headroom(&self) -> Option<usize> {
        Some(self.config.undo_capacity.saturating_sub(self.undo_stack.len()))
    }

    /// Commit a legal move.
    ///
    /// The undo record is dropped. When the turn ends on a full history the
    /// oldest fingerprint is evicted, so real play keeps recording the
    /// latest positions.
    fn play_move(&mut self, mv: Move) -> EngineResult<()> {
        if !self.legal_moves()?.contains(&mv) {
            return Err(EngineError::IllegalMove(mv));
        }
        self.apply_move(mv)?;
        if let Some(record) = self.undo_stack.pop() {
            if record.turn_switched && !record.history_recorded {
                self.history.remove(0);
                self.history.push(self.board.fingerprint());
            }
        }
        Ok(())
    }

    /// The side that cannot move, or has no pieces, loses.
    fn result(&self) -> Option<GameResult> {
        if self.board.count(Side::Black) == 0 {
            return Some(GameResult::Winner(Side::White.player()));
        }
        if self.board.count(Side::White) == 0 {
            return Some(GameResult::Winner(Side::Black.player()));
        }
        if !movegen::has_any_move(&self.board, self.side_to_move, self.pending_jumper) {
            return Some(GameResult::Winner(self.current_player().opponent()));
        }
        None
    }
}
