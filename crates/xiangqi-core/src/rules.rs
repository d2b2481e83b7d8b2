//! Per-piece movement shapes.
//!
//! Everything here ignores whether the mover's own general is left exposed;
//! that filter lives in [`crate::movegen`].

use crate::board::Board;
use crate::constants::{own_half, palace_rows, PALACE_COLS};
use crate::types::{Color, Piece, PieceKind, Square};

/// Whether `piece`, standing on `from`, may move to `to` by shape alone.
///
/// With `suppress_general_facing` set the general's flying-general rule is
/// skipped. Check detection sets it when probing attacks on a general, which
/// keeps that probe from asking about the opposing general in turn.
pub fn is_geometrically_legal(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    suppress_general_facing: bool,
) -> bool {
    if from == to {
        return false;
    }
    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    let dr = i16::from(to.row) - i16::from(from.row);
    let dc = i16::from(to.col) - i16::from(from.col);

    match piece.kind {
        PieceKind::Chariot => is_straight(dr, dc) && count_between(board, from, to) == 0,
        PieceKind::Horse => horse_move(board, from, dr, dc),
        PieceKind::Elephant => elephant_move(board, from, to, piece.color, dr, dc),
        PieceKind::Advisor => dr.abs() == 1 && dc.abs() == 1 && in_palace(to, piece.color),
        PieceKind::General => {
            dr.abs() + dc.abs() == 1
                && in_palace(to, piece.color)
                && (suppress_general_facing || !faces_enemy_general(board, from, to, piece.color))
        }
        PieceKind::Cannon => {
            if !is_straight(dr, dc) {
                return false;
            }
            let screens = count_between(board, from, to);
            match board.piece_at(to) {
                Some(_) => screens == 1,
                None => screens == 0,
            }
        }
        PieceKind::Soldier => soldier_move(from, piece.color, dr, dc),
    }
}

pub fn in_palace(square: Square, color: Color) -> bool {
    PALACE_COLS.contains(&square.col) && palace_rows(color).contains(&square.row)
}

pub fn in_own_half(square: Square, color: Color) -> bool {
    own_half(color).contains(&square.row)
}

pub fn has_crossed_river(square: Square, color: Color) -> bool {
    !in_own_half(square, color)
}

/// Occupied squares strictly between two squares sharing a row or column.
/// Returns 0 for squares that are not aligned.
pub fn count_between(board: &Board, from: Square, to: Square) -> usize {
    between(from, to)
        .filter(|&square| board.piece_at(square).is_some())
        .count()
}

fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (row, col) = (from.row, from.col);
    let rows = open_range(from.row, to.row);
    let cols = open_range(from.col, to.col);
    let aligned_row = (from.row == to.row).then_some(row);
    let aligned_col = (from.col == to.col).then_some(col);

    let along_row = aligned_row
        .into_iter()
        .flat_map(move |row| cols.clone().map(move |col| Square::new_unchecked(row, col)));
    let along_col = aligned_col
        .into_iter()
        .flat_map(move |col| rows.clone().map(move |row| Square::new_unchecked(row, col)));
    along_row.chain(along_col)
}

fn open_range(a: u8, b: u8) -> core::ops::Range<u8> {
    a.min(b) + 1..a.max(b)
}

fn is_straight(dr: i16, dc: i16) -> bool {
    (dr == 0) != (dc == 0)
}

fn horse_move(board: &Board, from: Square, dr: i16, dc: i16) -> bool {
    let (leg_dr, leg_dc) = match (dr.abs(), dc.abs()) {
        (2, 1) => (dr.signum(), 0),
        (1, 2) => (0, dc.signum()),
        _ => return false,
    };
    leg_is_clear(board, from, leg_dr, leg_dc)
}

fn elephant_move(board: &Board, from: Square, to: Square, color: Color, dr: i16, dc: i16) -> bool {
    dr.abs() == 2
        && dc.abs() == 2
        && in_own_half(to, color)
        && leg_is_clear(board, from, dr / 2, dc / 2)
}

fn leg_is_clear(board: &Board, from: Square, dr: i16, dc: i16) -> bool {
    // the leg of any in-grid move is itself on the grid
    from.offset(dr as i8, dc as i8)
        .is_some_and(|leg| board.piece_at(leg).is_none())
}

fn soldier_move(from: Square, color: Color, dr: i16, dc: i16) -> bool {
    let forward = i16::from(color.forward());
    if dr == forward && dc == 0 {
        return true;
    }
    has_crossed_river(from, color) && dr == 0 && dc.abs() == 1
}

/// Flying-general rule: after the general steps `from` -> `to`, it may not
/// stand on an open column with the enemy general.
fn faces_enemy_general(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let Some(enemy) = board.find_general(color.opponent()) else {
        return false;
    };
    if enemy.col != to.col {
        return false;
    }
    between(to, enemy).all(|square| square == from || board.piece_at(square).is_none())
}
