//! Legal move generation.
//!
//! Moves come out in a fixed order: by origin index, then by direction in
//! the order `(+1,-1) (+1,+1) (-1,-1) (-1,+1)`. The search relies on this
//! for deterministic tie-breaking.

use crate::core::{EngineResult, Move, MoveBuffer};

use super::board::{coord_to_index, index_to_coord, Board, Cell, Side, NUM_CELLS};

/// `(row, col)` steps; Black men use the first two, White men the last two.
const DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

fn directions(cell: Cell) -> &'static [(i8, i8)] {
    match cell {
        Cell::Empty => &[],
        Cell::BlackMan => &DIRECTIONS[..2],
        Cell::WhiteMan => &DIRECTIONS[2..],
        Cell::BlackKing | Cell::WhiteKing => &DIRECTIONS,
    }
}

fn offset(index: u8, dr: i8, dc: i8, distance: i8) -> Option<u8> {
    let (row, col) = index_to_coord(index);
    coord_to_index(row as i8 + dr * distance, col as i8 + dc * distance)
}

/// Cell jumped over by a two-row move, if `mv` is a jump.
#[must_use]
pub fn jumped_cell(mv: Move) -> Option<u8> {
    let (from_row, from_col) = index_to_coord(mv.from);
    let (to_row, to_col) = index_to_coord(mv.to);
    if from_row.abs_diff(to_row) != 2 {
        return None;
    }
    coord_to_index(
        ((from_row + to_row) / 2) as i8,
        ((from_col + to_col) / 2) as i8,
    )
}

/// Visit each capture available to the piece on `index`.
fn for_each_capture(board: &Board, index: u8, mut visit: impl FnMut(Move) -> bool) {
    let piece = board.get(index);
    let Some(side) = piece.side() else {
        return;
    };

    for &(dr, dc) in directions(piece) {
        let (Some(over), Some(landing)) = (offset(index, dr, dc, 1), offset(index, dr, dc, 2))
        else {
            continue;
        };
        if board.get(over).is_side(side.opponent())
            && board.get(landing).is_empty()
            && !visit(Move::new(index, landing))
        {
            return;
        }
    }
}

/// True when the piece on `index` can capture.
#[must_use]
pub fn can_capture(board: &Board, index: u8) -> bool {
    let mut found = false;
    for_each_capture(board, index, |_| {
        found = true;
        false
    });
    found
}

/// True when any piece of `side` can capture.
#[must_use]
pub fn side_can_capture(board: &Board, side: Side) -> bool {
    (0..NUM_CELLS as u8).any(|index| board.get(index).is_side(side) && can_capture(board, index))
}

/// Append the captures of the piece on `index`.
pub fn push_captures(board: &Board, index: u8, moves: &mut MoveBuffer) -> EngineResult<()> {
    let mut result = Ok(());
    for_each_capture(board, index, |mv| {
        result = moves.push(mv);
        result.is_ok()
    });
    result
}

/// Append the non-capturing steps of the piece on `index`.
pub fn push_steps(board: &Board, index: u8, moves: &mut MoveBuffer) -> EngineResult<()> {
    let piece = board.get(index);
    for &(dr, dc) in directions(piece) {
        if let Some(target) = offset(index, dr, dc, 1) {
            if board.get(target).is_empty() {
                moves.push(Move::new(index, target))?;
            }
        }
    }
    Ok(())
}

/// Fill `moves` with the legal moves of `side`.
///
/// Captures are forced across all pieces. While a multi-jump is under way
/// `pending` names the jumping piece, and only its captures are legal.
pub fn generate(
    board: &Board,
    side: Side,
    pending: Option<u8>,
    moves: &mut MoveBuffer,
) -> EngineResult<usize> {
    moves.clear();

    if let Some(jumper) = pending {
        push_captures(board, jumper, moves)?;
        return Ok(moves.len());
    }

    let forced = side_can_capture(board, side);
    for index in 0..NUM_CELLS as u8 {
        if !board.get(index).is_side(side) {
            continue;
        }
        if forced {
            push_captures(board, index, moves)?;
        } else {
            push_steps(board, index, moves)?;
        }
    }
    Ok(moves.len())
}

/// True when `side` has at least one legal move. Needs no buffer.
#[must_use]
pub fn has_any_move(board: &Board, side: Side, pending: Option<u8>) -> bool {
    if let Some(jumper) = pending {
        return can_capture(board, jumper);
    }
    (0..NUM_CELLS as u8).any(|index| {
        let piece = board.get(index);
        piece.is_side(side)
            && (can_capture(board, index)
                || directions(piece).iter().any(|&(dr, dc)| {
                    offset(index, dr, dc, 1).is_some_and(|target| board.get(target).is_empty())
                }))
    })
}

/// Drop the move that reverses `last`, provided another move remains.
pub fn filter_reversal(moves: &mut MoveBuffer, last: Move) {
    if moves.len() > 1 {
        let reversal = last.reversed();
        moves.retain(|mv| *mv != reversal);
    }
}
