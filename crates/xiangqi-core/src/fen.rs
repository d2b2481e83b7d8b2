use thiserror::Error;

use crate::board::Board;
use crate::constants::{COLS, ROWS};
use crate::types::{Color, Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Color,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("empty fen")]
    Empty,
    #[error("expected 10 rows, received {0}")]
    RowCount(usize),
    #[error("row {row} describes {width} columns, expected 9")]
    RowWidth { row: usize, width: usize },
    #[error("invalid piece '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidTurn(String),
    #[error("too many '{0}' pieces")]
    TooManyPieces(char),
}

/// Parses `<placement> [w|b] ...`. Placement lists row 0 (black's back rank)
/// first; any fields after the side to move are ignored. A missing side
/// field means red to move. No side may hold more pieces of a kind than it
/// starts with.
pub fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;
    let turn = match fields.next() {
        None => Color::Red,
        Some(field) => {
            let mut chars = field.chars();
            match (chars.next().and_then(Color::from_code), chars.next()) {
                (Some(color), None) => color,
                _ => return Err(FenError::InvalidTurn(field.to_string())),
            }
        }
    };

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != usize::from(ROWS) {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, desc) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in desc.chars() {
            if let Some(n) = ch.to_digit(10) {
                col += n as usize;
                continue;
            }
            let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if col >= usize::from(COLS) {
                return Err(FenError::RowWidth {
                    row,
                    width: col + 1,
                });
            }
            board.put(piece, Square::new_unchecked(row as u8, col as u8));
            col += 1;
        }
        if col != usize::from(COLS) {
            return Err(FenError::RowWidth { row, width: col });
        }
    }

    if let Some(piece) = board.excess_piece() {
        return Err(FenError::TooManyPieces(piece.fen_char()));
    }

    Ok(ParsedFen { board, turn })
}

pub fn encode_fen(state: &ParsedFen) -> String {
    format!("{} {}", encode_placement(&state.board), state.turn.to_code())
}

pub fn encode_placement(board: &Board) -> String {
    let mut placement = String::new();
    for row in 0..ROWS {
        let mut empties = 0u32;
        for col in 0..COLS {
            match board.piece_at(Square::new_unchecked(row, col)) {
                Some(piece) => {
                    if empties > 0 {
                        placement.push(char::from_digit(empties, 10).unwrap_or('1'));
                        empties = 0;
                    }
                    placement.push(piece.fen_char());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            placement.push(char::from_digit(empties, 10).unwrap_or('1'));
        }
        if row + 1 < ROWS {
            placement.push('/');
        }
    }
    placement
}
