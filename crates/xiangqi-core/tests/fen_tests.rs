use xiangqi_core::{encode_fen, parse_fen, Board, Color, FenError, Piece, PieceKind, Square, START_FEN};

#[test]
fn start_fen_matches_board_new() {
    let parsed = parse_fen(START_FEN).unwrap();
    assert_eq!(parsed.board, Board::new());
    assert_eq!(parsed.turn, Color::Red);
}

#[test]
fn encode_reproduces_start_fen() {
    let parsed = parse_fen(START_FEN).unwrap();
    assert_eq!(encode_fen(&parsed), START_FEN);
}

#[test]
fn trailing_fields_are_ignored() {
    let parsed = parse_fen("4k4/9/9/9/9/9/9/9/9/3K5 b - - 0 1").unwrap();
    assert_eq!(parsed.turn, Color::Black);
    assert_eq!(
        parsed.board.piece_at(Square::new_unchecked(9, 3)),
        Some(Piece::new(PieceKind::General, Color::Red))
    );
}

#[test]
fn missing_side_defaults_to_red() {
    let parsed = parse_fen("4k4/9/9/9/9/9/9/9/9/4K4").unwrap();
    assert_eq!(parsed.turn, Color::Red);
}

#[test]
fn alternate_letters_for_elephant_and_horse() {
    let parsed = parse_fen("rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w").unwrap();
    assert_eq!(parsed.board, Board::new());
}

#[test]
fn rejects_malformed_placements() {
    assert_eq!(parse_fen(""), Err(FenError::Empty));
    assert_eq!(
        parse_fen("4k4/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::RowCount(9))
    );
    assert_eq!(
        parse_fen("4k3/9/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::RowWidth { row: 0, width: 8 })
    );
    assert_eq!(
        parse_fen("4k5/9/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::RowWidth { row: 0, width: 10 })
    );
    assert_eq!(
        parse_fen("9k/9/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::RowWidth { row: 0, width: 10 })
    );
    assert_eq!(
        parse_fen("4x4/9/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::InvalidPiece('x'))
    );
    assert_eq!(
        parse_fen("4k4/9/9/9/9/9/9/9/9/4K4 x"),
        Err(FenError::InvalidTurn("x".to_string()))
    );
}

#[test]
fn rejects_more_pieces_than_a_full_set() {
    assert_eq!(
        parse_fen("4k4/9/9/9/9/9/9/9/RRR6/4K4 w"),
        Err(FenError::TooManyPieces('R'))
    );
    assert_eq!(
        parse_fen("3kk4/9/9/9/9/9/9/9/9/4K4 w"),
        Err(FenError::TooManyPieces('k'))
    );
    assert!(parse_fen("4k4/9/9/p1p1p1p1p/9/9/9/9/RR7/4K4 w").is_ok());
}
