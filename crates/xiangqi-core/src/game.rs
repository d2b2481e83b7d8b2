use thiserror::Error;

use crate::board::Board;
use crate::fen::{encode_fen, parse_fen, FenError, ParsedFen};
use crate::movegen::{in_check, is_legal_move, legal_moves};
use crate::types::{Color, Move, MoveList, Outcome, Piece};
use crate::wire::{validate_suggestion, BoardSnapshot, SuggestionError, WireMove};

/// Ongoing while `side` has a legal move; otherwise checkmate when in check
/// and stalemate when not.
pub fn classify(board: &Board, side: Color) -> Outcome {
    if !legal_moves(board, side).is_empty() {
        Outcome::Ongoing
    } else if in_check(board, side) {
        Outcome::Checkmate(side)
    } else {
        Outcome::Stalemate
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("fen: {0}")]
    Fen(#[from] FenError),
    #[error("game is over: {0}")]
    GameOver(Outcome),
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error("no move to undo")]
    EmptyHistory,
    #[error("rejected suggestion: {0}")]
    Suggestion(#[from] SuggestionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub captured: Option<Piece>,
}

/// A game in progress: the current board, whose turn it is, and the moves
/// played so far. The outcome is recomputed after every move.
#[derive(Debug, Clone)]
pub struct Xiangqi {
    board: Board,
    turn: Color,
    outcome: Outcome,
    history: Vec<HistoryEntry>,
}

impl Default for Xiangqi {
    fn default() -> Self {
        Self::new()
    }
}

impl Xiangqi {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Red)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        let outcome = classify(&board, turn);
        Self {
            board,
            turn,
            outcome,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let ParsedFen { board, turn } = parse_fen(fen)?;
        Ok(Self::from_board(board, turn))
    }

    pub fn fen(&self) -> String {
        encode_fen(&ParsedFen {
            board: self.board.clone(),
            turn: self.turn,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn moves(&self) -> MoveList {
        if self.outcome.is_terminal() {
            MoveList::new()
        } else {
            legal_moves(&self.board, self.turn)
        }
    }

    pub fn in_check(&self) -> bool {
        in_check(&self.board, self.turn)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Plays `mv` for the side to move and returns the new outcome.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver(self.outcome));
        }
        if !is_legal_move(&self.board, self.turn, mv) {
            return Err(GameError::IllegalMove(mv));
        }
        Ok(self.commit(mv))
    }

    /// Validates an oracle reply for the side to move and plays it.
    pub fn apply_suggestion(&mut self, suggestion: Option<&WireMove>) -> Result<Outcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver(self.outcome));
        }
        let mv = validate_suggestion(&self.board, self.turn, suggestion)?;
        Ok(self.commit(mv))
    }

    pub fn undo(&mut self) -> Result<Move, GameError> {
        let entry = self.history.pop().ok_or(GameError::EmptyHistory)?;
        let moved = self.board.piece_at(entry.mv.to);
        self.board.set(entry.mv.from, moved);
        self.board.set(entry.mv.to, entry.captured);
        self.turn = self.turn.opponent();
        self.outcome = Outcome::Ongoing;
        Ok(entry.mv)
    }

    /// Discards the game and returns to the starting layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(&self.board, self.turn)
    }

    fn commit(&mut self, mv: Move) -> Outcome {
        let captured = self.board.apply(mv);
        self.history.push(HistoryEntry { mv, captured });
        self.turn = self.turn.opponent();
        self.outcome = classify(&self.board, self.turn);
        self.outcome
    }
}
