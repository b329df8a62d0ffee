//! Board representation for 8×8 checkers.
//!
//! Only the 32 dark cells are stored, indexed row by row from Black's side:
//! `row = index / 4`; even rows use the odd columns, odd rows the even ones.
//!
//! ```text
//!   col 0 1 2 3 4 5 6 7
//! row 0   .   .   .   .     indices  0..=3
//! row 1 .   .   .   .       indices  4..=7
//! ...
//! row 7 .   .   .   .       indices 28..=31
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Player, Score};

/// Number of playable cells.
pub const NUM_CELLS: usize = 32;

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

// =============================================================================
// Pieces
// =============================================================================

/// Piece colour.
///
/// Black moves first, starts on rows 0-2 and is the maximizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The search role this side plays.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Side::Black => Player::Maximizer,
            Side::White => Player::Minimizer,
        }
    }

    /// Row a man of this side promotes on.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Black => BOARD_SIZE - 1,
            Side::White => 0,
        }
    }
}

/// Piece rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// Contents of one cell, one byte each.
///
/// The discriminant is the packed raw value `rank | side << 2`
/// (rank 1 = man, 2 = king; side 1 = Black, 0 = White). Fingerprints fold
/// these raw values.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty = 0,
    WhiteMan = 1,
    WhiteKing = 2,
    BlackMan = 5,
    BlackKing = 6,
}

impl Cell {
    /// The cell holding a piece of the given rank and side.
    #[must_use]
    pub const fn piece(rank: Rank, side: Side) -> Self {
        match (rank, side) {
            (Rank::Man, Side::Black) => Cell::BlackMan,
            (Rank::King, Side::Black) => Cell::BlackKing,
            (Rank::Man, Side::White) => Cell::WhiteMan,
            (Rank::King, Side::White) => Cell::WhiteKing,
        }
    }

    /// Side of the occupying piece.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
        }
    }

    /// Rank of the occupying piece.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Cell::Empty => None,
            Cell::BlackMan | Cell::WhiteMan => Some(Rank::Man),
            Cell::BlackKing | Cell::WhiteKing => Some(Rank::King),
        }
    }

    /// Packed encoding.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True when occupied by `side`.
    #[must_use]
    pub fn is_side(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Same piece crowned. Kings and empty cells are unchanged.
    #[must_use]
    pub const fn crowned(self) -> Self {
        match self {
            Cell::BlackMan => Cell::BlackKing,
            Cell::WhiteMan => Cell::WhiteKing,
            other => other,
        }
    }

    /// Text symbol: `.` empty, `b`/`B` Black man/king, `w`/`W` White man/king.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
            Cell::WhiteMan => 'w',
            Cell::WhiteKing => 'W',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            'w' => Some(Cell::WhiteMan),
            'W' => Some(Cell::WhiteKing),
            _ => None,
        }
    }
}

// =============================================================================
// Coordinates
// =============================================================================

/// Row and column of a cell index.
///
/// `index` must be below [`NUM_CELLS`].
#[must_use]
pub const fn index_to_coord(index: u8) -> (u8, u8) {
    let row = index / 4;
    let slot = index % 4;
    let col = if row % 2 == 0 { slot * 2 + 1 } else { slot * 2 };
    (row, col)
}

/// Cell index of a coordinate.
///
/// Returns `None` off the board or on a light cell. Signed inputs let move
/// generation pass unchecked offsets.
#[must_use]
pub fn coord_to_index(row: i8, col: i8) -> Option<u8> {
    let size = BOARD_SIZE as i8;
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return None;
    }
    if (row + col) % 2 == 0 {
        return None;
    }
    // Both parities reduce to col / 2 within the row.
    Some((row * 4 + col / 2) as u8)
}

// =============================================================================
// Board
// =============================================================================

/// The 32 dark cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Standard layout: Black men on 0..12, White men on 20..32.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for index in 0..12 {
            board.cells[index] = Cell::BlackMan;
        }
        for index in 20..NUM_CELLS {
            board.cells[index] = Cell::WhiteMan;
        }
        board
    }

    #[must_use]
    pub fn get(&self, index: u8) -> Cell {
        self.cells[usize::from(index)]
    }

    pub fn set(&mut self, index: u8, cell: Cell) {
        self.cells[usize::from(index)] = cell;
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Number of pieces `side` has left.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.is_side(side)).count()
    }

    /// Rolling 16-bit fingerprint of the cell contents.
    ///
    /// Collisions are possible; only suitable for repetition scoring.
    #[must_use]
    pub fn fingerprint(&self) -> u16 {
        self.cells.iter().fold(0u16, |hash, cell| {
            hash.wrapping_mul(33) ^ u16::from(cell.raw())
        })
    }

    /// Material plus advancement, positive for Black.
    ///
    /// A man is worth 3 plus the rows it has advanced, a king 5.
    #[must_use]
    pub fn material(&self) -> Score {
        let mut score = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            let (row, _) = index_to_coord(index as u8);
            let row = Score::from(row);
            score += match cell {
                Cell::Empty => 0,
                Cell::BlackMan => 3 + row,
                Cell::WhiteMan => -(3 + (7 - row)),
                Cell::BlackKing => 5,
                Cell::WhiteKing => -5,
            };
        }
        score
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse 32 cell symbols in index order. Whitespace is ignored, so the
    /// [`Display`](fmt::Display) grid parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            if count == NUM_CELLS {
                return Err(EngineError::InvalidBoard(format!(
                    "more than {NUM_CELLS} cells"
                )));
            }
            board.cells[count] = Cell::from_symbol(symbol).ok_or_else(|| {
                EngineError::InvalidBoard(format!("unknown cell symbol '{symbol}'"))
            })?;
            count += 1;
        }

        if count != NUM_CELLS {
            return Err(EngineError::InvalidBoard(format!(
                "expected {NUM_CELLS} cells, found {count}"
            )));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Row 0 first; light cells are blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as i8 {
            for col in 0..BOARD_SIZE as i8 {
                match coord_to_index(row, col) {
                    Some(index) => write!(f, "{}", self.get(index).symbol())?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
