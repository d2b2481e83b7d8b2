use std::fmt;

use crate::constants::{back_rank, COLS, NUM_SQUARES, ROWS, SQUARES};
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Full 10x9 grid, one optional piece per square.
///
/// Boards are plain values: `with_move` returns a fresh copy, so probing a
/// hypothetical move never disturbs a board held elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.load_back_rank(Color::Black);
        board.load_front_ranks(Color::Black);
        board.load_front_ranks(Color::Red);
        board.load_back_rank(Color::Red);
        board
    }

    pub const fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    pub fn put(&mut self, piece: Piece, square: Square) {
        self.set(square, Some(piece));
    }

    /// Relocates the piece on `mv.from` to `mv.to`, whatever was there.
    /// No legality check is made.
    pub fn with_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// In-place form of [`Board::with_move`]; returns the captured piece.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.cells[mv.from.index()].take();
        std::mem::replace(&mut self.cells[mv.to.index()], moving)
    }

    pub fn find_general(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::General && piece.color == color)
            .map(|(square, _)| square)
    }

    /// First piece found beyond its kind's starting count, if any.
    pub fn excess_piece(&self) -> Option<Piece> {
        let mut counts = [[0usize; PieceKind::ALL.len()]; 2];
        self.pieces().find_map(|(_, piece)| {
            let count = &mut counts[piece.color as usize][piece.kind as usize];
            *count += 1;
            (*count > piece.kind.max_count()).then_some(piece)
        })
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SQUARES
            .into_iter()
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    fn load_back_rank(&mut self, color: Color) {
        const ORDER: [PieceKind; COLS as usize] = [
            PieceKind::Chariot,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Advisor,
            PieceKind::General,
            PieceKind::Advisor,
            PieceKind::Elephant,
            PieceKind::Horse,
            PieceKind::Chariot,
        ];

        let row = back_rank(color);
        for (col, kind) in (0..COLS).zip(ORDER) {
            self.put(Piece::new(kind, color), Square::new_unchecked(row, col));
        }
    }

    fn load_front_ranks(&mut self, color: Color) {
        let (cannon_row, soldier_row) = match color {
            Color::Black => (2, 3),
            Color::Red => (7, 6),
        };

        let cannon = Piece::new(PieceKind::Cannon, color);
        self.put(cannon, Square::new_unchecked(cannon_row, 1));
        self.put(cannon, Square::new_unchecked(cannon_row, 7));

        let soldier = Piece::new(PieceKind::Soldier, color);
        for col in (0..COLS).step_by(2) {
            self.put(soldier, Square::new_unchecked(soldier_row, col));
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "{row} ")?;
            for col in 0..COLS {
                match self.piece_at(Square::new_unchecked(row, col)) {
                    Some(piece) => write!(f, " {}", piece.fen_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)
    }
}
