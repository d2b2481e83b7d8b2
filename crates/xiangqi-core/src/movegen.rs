use log::warn;

use crate::board::Board;
use crate::constants::SQUARES;
use crate::rules::is_geometrically_legal;
use crate::types::{Color, Move, MoveList, Square};

/// Whether some opposing piece can reach `color`'s general.
///
/// A board without that general is reported as in check so callers fall
/// through to game-over handling.
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(general) = board.find_general(color) else {
        warn!("no {color} general on board; treating {color} as in check");
        return true;
    };

    board
        .pieces_of(color.opponent())
        .any(|(origin, piece)| is_geometrically_legal(board, origin, general, piece, true))
}

/// Every move of `color` that is geometrically legal and leaves its own
/// general safe. Order is unspecified.
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces_of(color) {
        append_moves_from(board, from, piece.color, &mut moves);
    }
    moves
}

/// Legal moves of whichever piece stands on `from`; empty for an empty square.
pub fn legal_moves_from(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    if let Some(piece) = board.piece_at(from) {
        append_moves_from(board, from, piece.color, &mut moves);
    }
    moves
}

pub fn is_legal_move(board: &Board, color: Color, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    piece.color == color
        && is_geometrically_legal(board, mv.from, mv.to, piece, false)
        && !in_check(&board.with_move(mv), color)
}

/// Leaf nodes of the legal move tree below `board`, `depth` plies deep.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&board.with_move(mv), side.opponent(), depth - 1))
        .sum()
}

fn append_moves_from(board: &Board, from: Square, color: Color, out: &mut MoveList) {
    for to in SQUARES {
        let mv = Move::new(from, to);
        if is_legal_move(board, color, mv) {
            out.push(mv);
        }
    }
}
