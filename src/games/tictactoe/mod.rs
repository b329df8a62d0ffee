//! Tic-tac-toe on a 3×3 board.
//!
//! X moves first and plays the maximizer. Moves are placements
//! (`Move::place(cell)`) with cells numbered row by row from 0 to 8.
//!
//! The empty board is answered from an opening book: the centre, or a
//! seeded pick among the centre and corners.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, GameRng, Move, MoveBuffer, Player, Score};
use crate::rules::{GamePosition, GameResult};

/// Number of cells.
pub const NUM_CELLS: usize = 9;

/// Score of a won position.
pub const WIN_SCORE: Score = 10;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const CENTRE: u8 = 4;
const BOOK_OPENINGS: [u8; 5] = [0, 2, 4, 6, 8];

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Mark::X => Player::Maximizer,
            Mark::O => Player::Minimizer,
        }
    }
}

/// Tic-tac-toe position.
///
/// ```
/// use pocket_minimax::games::tictactoe::TicTacToe;
/// use pocket_minimax::rules::GamePosition;
///
/// let game: TicTacToe = "XX. OO. ...".parse().unwrap();
/// assert!(!game.is_terminal());
/// assert_eq!(game.legal_moves().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct TicTacToe {
    cells: [Option<Mark>; NUM_CELLS],
    to_move: Mark,
    /// Set when the opening book picks randomly.
    opening_rng: Option<GameRng>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move, centre opening.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
            to_move: Mark::X,
            opening_rng: None,
        }
    }

    /// Empty board whose opening book picks among centre and corners.
    #[must_use]
    pub fn with_random_opening(seed: u64) -> Self {
        Self {
            opening_rng: Some(GameRng::new(seed)),
            ..Self::new()
        }
    }

    /// Position from explicit cells. The side to move follows from the
    /// mark counts.
    pub fn from_cells(cells: [Option<Mark>; NUM_CELLS]) -> EngineResult<Self> {
        let xs = cells.iter().filter(|&&c| c == Some(Mark::X)).count();
        let os = cells.iter().filter(|&&c| c == Some(Mark::O)).count();
        let to_move = match xs.checked_sub(os) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => {
                return Err(EngineError::InvalidBoard(format!(
                    "{xs} X marks and {os} O marks cannot occur"
                )))
            }
        };
        Ok(Self {
            cells,
            to_move,
            opening_rng: None,
        })
    }

    /// Clear the board. The opening book setting is kept.
    pub fn reset(&mut self) {
        self.cells = [None; NUM_CELLS];
        self.to_move = Mark::X;
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; NUM_CELLS] {
        &self.cells
    }

    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Empty cells as placement moves, in cell order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.empty_cells().map(Move::place).collect()
    }

    /// True when `mark` owns a complete line.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.cells[cell] == Some(mark)))
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0..NUM_CELLS as u8).filter(|&cell| self.cells[usize::from(cell)].is_none())
    }

    /// Uncontested lines: two marks ±5, one mark ±1.
    fn line_score(&self, line: &[usize; 3]) -> Score {
        let xs = line.iter().filter(|&&c| self.cells[c] == Some(Mark::X)).count();
        let os = line.iter().filter(|&&c| self.cells[c] == Some(Mark::O)).count();
        let weight = |count: usize| match count {
            1 => 1,
            2 => 5,
            _ => 0,
        };
        match (xs, os) {
            (n, 0) => weight(n),
            (0, n) => -weight(n),
            _ => 0,
        }
    }
}

impl GamePosition for TicTacToe {
    const MAX_MOVES: usize = NUM_CELLS;

    fn evaluate(&self) -> Score {
        for mark in [Mark::X, Mark::O] {
            if self.is_winner(mark) {
                return WIN_SCORE * mark.player().sign();
            }
        }
        LINES.iter().map(|line| self.line_score(line)).sum()
    }

    fn generate_moves(&self, moves: &mut MoveBuffer) -> EngineResult<usize> {
        moves.clear();
        for cell in self.empty_cells() {
            moves.push(Move::place(cell))?;
        }
        Ok(moves.len())
    }

    fn apply_move(&mut self, mv: Move) -> EngineResult<()> {
        let cell = usize::from(mv.to);
        if cell >= NUM_CELLS || self.cells[cell].is_some() {
            return Err(EngineError::IllegalMove(mv));
        }
        self.cells[cell] = Some(self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn undo_move(&mut self, mv: Move) {
        let cell = usize::from(mv.to);
        if cell < NUM_CELLS && self.cells[cell].take().is_some() {
            self.to_move = self.to_move.opponent();
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_winner(Mark::X) || self.is_winner(Mark::O) || self.is_full()
    }

    fn current_player(&self) -> Player {
        self.to_move.player()
    }

    fn optimal_opening_move(&mut self) -> Option<Move> {
        if !self.is_empty() {
            return None;
        }
        let cell = match self.opening_rng.as_mut() {
            Some(rng) => rng.choose(&BOOK_OPENINGS).copied().unwrap_or(CENTRE),
            None => CENTRE,
        };
        Some(Move::place(cell))
    }

    fn result(&self) -> Option<GameResult> {
        if self.is_winner(Mark::X) {
            Some(GameResult::Winner(Player::Maximizer))
        } else if self.is_winner(Mark::O) {
            Some(GameResult::Winner(Player::Minimizer))
        } else if self.is_full() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}

impl FromStr for TicTacToe {
    type Err = EngineError;

    /// Nine symbols `X`, `O` or `.`; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; NUM_CELLS];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            if count == NUM_CELLS {
                return Err(EngineError::InvalidBoard(format!(
                    "more than {NUM_CELLS} cells"
                )));
            }
            cells[count] = match symbol {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unknown cell symbol '{other}'"
                    )))
                }
            };
            count += 1;
        }

        if count != NUM_CELLS {
            return Err(EngineError::InvalidBoard(format!(
                "expected {NUM_CELLS} cells, found {count}"
            )));
        }
        Self::from_cells(cells)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                let symbol = match cell {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = TicTacToe::new();
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.current_player(), Player::Maximizer);
        assert_eq!(game.legal_moves().len(), 9);
        assert_eq!(game.evaluate(), 0);
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_apply_and_undo() {
        let mut game = TicTacToe::new();
        game.apply_move(Move::place(4)).unwrap();
        assert_eq!(game.cells()[4], Some(Mark::X));
        assert_eq!(game.to_move(), Mark::O);

        let err = game.apply_move(Move::place(4)).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove(Move::place(4)));

        game.undo_move(Move::place(4));
        assert!(game.cells().iter().all(Option::is_none));
        assert_eq!(game.to_move(), Mark::X);

        // Nothing to undo.
        game.undo_move(Move::place(4));
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_line_heuristic() {
        // X centre: row, column and both diagonals each +1.
        let game: TicTacToe = "... .X. ...".parse().unwrap();
        assert_eq!(game.evaluate(), 4);

        // X centre and corner 0, O corner 8 spoils the main diagonal.
        let game: TicTacToe = "X.. .X. ..O".parse().unwrap();
        // row0 +1, col0 +1, row1 +1, col1 +1, diag 2-4-6 +1, row2 -1, col2 -1.
        assert_eq!(game.evaluate(), 3);

        // Open pairs cancel; O's centre still owns diagonal 2-4-6.
        let game: TicTacToe = "XX. OO. ...".parse().unwrap();
        assert_eq!(game.evaluate(), -1);
    }

    #[test]
    fn test_win_and_draw() {
        let game: TicTacToe = "XXX OO. ...".parse().unwrap();
        assert!(game.is_terminal());
        assert_eq!(game.evaluate(), WIN_SCORE);
        assert_eq!(game.result(), Some(GameResult::Winner(Player::Maximizer)));

        let game: TicTacToe = "XOX XOO OXX".parse().unwrap();
        assert!(game.is_terminal());
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_from_cells_rejects_impossible_counts() {
        assert!("OO. ... ...".parse::<TicTacToe>().is_err());
        assert!("XXX ... ...".parse::<TicTacToe>().is_err());
        assert!("XX".parse::<TicTacToe>().is_err());
    }

    #[test]
    fn test_opening_book() {
        let mut game = TicTacToe::new();
        assert_eq!(game.optimal_opening_move(), Some(Move::place(4)));

        let mut game = TicTacToe::with_random_opening(7);
        let mv = game.optimal_opening_move().unwrap();
        assert!(BOOK_OPENINGS.contains(&mv.to));

        game.apply_move(mv).unwrap();
        assert_eq!(game.optimal_opening_move(), None);
    }

    #[test]
    fn test_random_opening_is_seeded() {
        let picks = |seed| {
            let mut game = TicTacToe::with_random_opening(seed);
            (0..10)
                .map(|_| game.optimal_opening_move().unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(3), picks(3));
    }

    #[test]
    fn test_display_round_trip() {
        let game: TicTacToe = "XO. .X. ..O".parse().unwrap();
        let text = game.to_string();
        assert_eq!(text, "XO.\n.X.\n..O\n");
        let parsed: TicTacToe = text.parse().unwrap();
        assert_eq!(parsed.cells(), game.cells());
    }
}
