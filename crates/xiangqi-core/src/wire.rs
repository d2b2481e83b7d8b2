//! Flat serde representation exchanged with the move-suggestion oracle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::movegen::is_legal_move;
use crate::types::{Color, Move, Piece, PieceKind, Square};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("square ({row}, {col}) holds more than one piece")]
    Occupied { row: u8, col: u8 },
    #[error("too many {color} {kind:?} pieces")]
    TooManyPieces { kind: PieceKind, color: Color },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("oracle returned no move")]
    NoMove,
    #[error("suggested move leaves the board: {0}")]
    OutOfBounds(WireError),
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
    #[error("origin piece is {found}, expected {expected}")]
    WrongColor { expected: Color, found: Color },
    #[error("move {0} is not legal in this position")]
    Illegal(Move),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSquare {
    pub row: u8,
    pub col: u8,
}

impl WireSquare {
    pub fn to_square(self) -> Result<Square, WireError> {
        Square::new(self.row, self.col).ok_or(WireError::OutOfBounds {
            row: self.row,
            col: self.col,
        })
    }
}

impl From<Square> for WireSquare {
    fn from(square: Square) -> Self {
        Self {
            row: square.row,
            col: square.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub from: WireSquare,
    pub to: WireSquare,
}

impl WireMove {
    pub fn to_move(self) -> Result<Move, WireError> {
        Ok(Move::new(self.from.to_square()?, self.to.to_square()?))
    }
}

impl From<Move> for WireMove {
    fn from(mv: Move) -> Self {
        Self {
            from: mv.from.into(),
            to: mv.to.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePiece {
    pub kind: PieceKind,
    pub color: Color,
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub pieces: Vec<WirePiece>,
    pub side_to_move: Color,
}

impl BoardSnapshot {
    pub fn new(board: &Board, side_to_move: Color) -> Self {
        let pieces = board
            .pieces()
            .map(|(square, piece)| WirePiece {
                kind: piece.kind,
                color: piece.color,
                row: square.row,
                col: square.col,
            })
            .collect();
        Self {
            pieces,
            side_to_move,
        }
    }

    pub fn to_board(&self) -> Result<Board, WireError> {
        let mut board = Board::empty();
        for wire in &self.pieces {
            let square = WireSquare {
                row: wire.row,
                col: wire.col,
            }
            .to_square()?;
            if board.piece_at(square).is_some() {
                return Err(WireError::Occupied {
                    row: wire.row,
                    col: wire.col,
                });
            }
            board.put(Piece::new(wire.kind, wire.color), square);
        }
        if let Some(piece) = board.excess_piece() {
            return Err(WireError::TooManyPieces {
                kind: piece.kind,
                color: piece.color,
            });
        }
        Ok(board)
    }
}

/// Re-checks an oracle reply against the position it was asked about.
///
/// The oracle is untrusted: the move must name an in-grid origin holding a
/// piece of `side`, and must be one of `side`'s legal moves.
pub fn validate_suggestion(
    board: &Board,
    side: Color,
    suggestion: Option<&WireMove>,
) -> Result<Move, SuggestionError> {
    let wire = suggestion.ok_or(SuggestionError::NoMove)?;
    let mv = wire.to_move().map_err(SuggestionError::OutOfBounds)?;
    let piece = board
        .piece_at(mv.from)
        .ok_or(SuggestionError::EmptyOrigin(mv.from))?;
    if piece.color != side {
        return Err(SuggestionError::WrongColor {
            expected: side,
            found: piece.color,
        });
    }
    if !is_legal_move(board, side, mv) {
        return Err(SuggestionError::Illegal(mv));
    }
    Ok(mv)
}
