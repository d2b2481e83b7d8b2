use std::mem::size_of;

use xiangqi_core::{Board, Color, Move, Piece, PieceKind, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

#[test]
fn board_is_a_small_value() {
    assert!(
        size_of::<Board>() <= 200,
        "board too large: {}",
        size_of::<Board>()
    );
}

#[test]
fn board_new_builds_standard_layout() {
    let board = Board::new();

    assert_eq!(
        board.piece_at(sq(0, 4)),
        Some(Piece::new(PieceKind::General, Color::Black))
    );
    assert_eq!(
        board.piece_at(sq(9, 4)),
        Some(Piece::new(PieceKind::General, Color::Red))
    );
    assert_eq!(
        board.piece_at(sq(2, 7)),
        Some(Piece::new(PieceKind::Cannon, Color::Black))
    );
    assert_eq!(
        board.piece_at(sq(7, 1)),
        Some(Piece::new(PieceKind::Cannon, Color::Red))
    );
    assert_eq!(
        board.piece_at(sq(6, 8)),
        Some(Piece::new(PieceKind::Soldier, Color::Red))
    );
    assert_eq!(
        board.piece_at(sq(9, 6)),
        Some(Piece::new(PieceKind::Elephant, Color::Red))
    );
    assert_eq!(board.piece_at(sq(4, 4)), None);

    assert_eq!(board.pieces_of(Color::Red).count(), 16);
    assert_eq!(board.pieces_of(Color::Black).count(), 16);
}

#[test]
fn find_general_reports_absence() {
    let board = Board::new();
    assert_eq!(board.find_general(Color::Red), Some(sq(9, 4)));
    assert_eq!(board.find_general(Color::Black), Some(sq(0, 4)));
    assert_eq!(Board::empty().find_general(Color::Red), None);
}

#[test]
fn with_move_leaves_original_untouched() {
    let board = Board::new();
    let mv = Move::new(sq(7, 1), sq(0, 1));
    let next = board.with_move(mv);

    assert_eq!(board, Board::new());
    assert_eq!(next.piece_at(sq(7, 1)), None);
    assert_eq!(
        next.piece_at(sq(0, 1)),
        Some(Piece::new(PieceKind::Cannon, Color::Red))
    );
    assert_eq!(next.pieces().count(), 31);
}

#[test]
fn with_move_ignores_legality() {
    let board = Board::new();
    let next = board.with_move(Move::new(sq(9, 0), sq(0, 8)));
    assert_eq!(
        next.piece_at(sq(0, 8)),
        Some(Piece::new(PieceKind::Chariot, Color::Red))
    );
}
