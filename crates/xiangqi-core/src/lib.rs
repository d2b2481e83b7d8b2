pub mod board;
pub mod constants;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod rules;
pub mod types;
pub mod wire;

pub use board::Board;
pub use constants::{SQUARES, START_FEN};
pub use fen::{encode_fen, parse_fen, FenError, ParsedFen};
pub use game::{classify, GameError, HistoryEntry, Xiangqi};
pub use movegen::{in_check, is_legal_move, legal_moves, legal_moves_from, perft};
pub use rules::is_geometrically_legal;
pub use types::{Color, Move, MoveList, Outcome, Piece, PieceKind, Square};
pub use wire::{
    validate_suggestion, BoardSnapshot, SuggestionError, WireError, WireMove, WirePiece,
    WireSquare,
};
