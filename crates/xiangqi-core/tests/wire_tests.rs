use xiangqi_core::{
    validate_suggestion, Board, BoardSnapshot, Color, Move, Outcome, PieceKind, Square, WireError,
    WireMove, WirePiece, Xiangqi,
};

#[test]
fn snapshot_round_trips_through_json() {
    let board = Board::new().with_move(Move::new(
        Square::new_unchecked(7, 1),
        Square::new_unchecked(7, 4),
    ));
    let snapshot = BoardSnapshot::new(&board, Color::Black);

    let json = serde_json::to_string(&snapshot).expect("serialize");
    let decoded: BoardSnapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.side_to_move, Color::Black);
    assert_eq!(decoded.to_board().expect("valid board"), board);
}

#[test]
fn snapshot_uses_flat_field_names() {
    let value = serde_json::to_value(Xiangqi::new().snapshot()).expect("serialize");
    assert_eq!(value["sideToMove"], "red");

    let pieces = value["pieces"].as_array().expect("pieces array");
    assert_eq!(pieces.len(), 32);
    assert_eq!(
        pieces[0],
        serde_json::json!({ "kind": "R", "color": "black", "row": 0, "col": 0 })
    );
}

#[test]
fn decodes_oracle_reply() {
    let reply: Option<WireMove> =
        serde_json::from_str(r#"{ "from": { "row": 7, "col": 1 }, "to": { "row": 7, "col": 4 } }"#)
            .expect("deserialize move");
    let mv = validate_suggestion(&Board::new(), Color::Red, reply.as_ref()).expect("legal");
    assert_eq!(
        mv,
        Move::new(Square::new_unchecked(7, 1), Square::new_unchecked(7, 4))
    );

    let absent: Option<WireMove> = serde_json::from_str("null").expect("deserialize null");
    assert!(absent.is_none());
}

#[test]
fn to_board_rejects_bad_piece_lists() {
    let general = |row, col| WirePiece {
        kind: PieceKind::General,
        color: Color::Red,
        row,
        col,
    };

    let off_grid = BoardSnapshot {
        pieces: vec![general(10, 4)],
        side_to_move: Color::Red,
    };
    assert_eq!(
        off_grid.to_board(),
        Err(WireError::OutOfBounds { row: 10, col: 4 })
    );

    let stacked = BoardSnapshot {
        pieces: vec![general(9, 4), general(9, 4)],
        side_to_move: Color::Red,
    };
    assert_eq!(stacked.to_board(), Err(WireError::Occupied { row: 9, col: 4 }));

    let chariot = |col| WirePiece {
        kind: PieceKind::Chariot,
        color: Color::Red,
        row: 5,
        col,
    };
    let overfull = BoardSnapshot {
        pieces: vec![general(9, 4), chariot(0), chariot(1), chariot(2)],
        side_to_move: Color::Red,
    };
    assert_eq!(
        overfull.to_board(),
        Err(WireError::TooManyPieces {
            kind: PieceKind::Chariot,
            color: Color::Red,
        })
    );
}

#[test]
fn outcome_serializes_with_loser() {
    let value = serde_json::to_value(Outcome::Checkmate(Color::Black)).expect("serialize");
    assert_eq!(value, serde_json::json!({ "state": "checkmate", "loser": "black" }));

    let value = serde_json::to_value(Outcome::Stalemate).expect("serialize");
    assert_eq!(value, serde_json::json!({ "state": "stalemate" }));
}
