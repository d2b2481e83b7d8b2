use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::constants::{COLS, ROWS};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::Red => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' | 'r' => Some(Self::Red),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    /// Row delta of one step toward the opposing back rank.
    pub const fn forward(self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "K")]
    General = 0,
    #[serde(rename = "A")]
    Advisor = 1,
    #[serde(rename = "E")]
    Elephant = 2,
    #[serde(rename = "N")]
    Horse = 3,
    #[serde(rename = "R")]
    Chariot = 4,
    #[serde(rename = "C")]
    Cannon = 5,
    #[serde(rename = "P")]
    Soldier = 6,
}

impl PieceKind {
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Advisor,
        Self::Elephant,
        Self::Horse,
        Self::Chariot,
        Self::Cannon,
        Self::Soldier,
    ];

    /// Single-letter code shared with the presentation layer.
    pub const fn ui_code(self) -> char {
        match self {
            Self::General => 'K',
            Self::Advisor => 'A',
            Self::Elephant => 'E',
            Self::Horse => 'N',
            Self::Chariot => 'R',
            Self::Cannon => 'C',
            Self::Soldier => 'P',
        }
    }

    pub const fn from_ui_code(code: char) -> Option<Self> {
        match code {
            'K' => Some(Self::General),
            'A' => Some(Self::Advisor),
            'E' => Some(Self::Elephant),
            'N' => Some(Self::Horse),
            'R' => Some(Self::Chariot),
            'C' => Some(Self::Cannon),
            'P' => Some(Self::Soldier),
            _ => None,
        }
    }

    /// Copies of this kind each side starts with; no position may hold more.
    pub const fn max_count(self) -> usize {
        match self {
            Self::General => 1,
            Self::Soldier => 5,
            _ => 2,
        }
    }

    pub const fn fen_code(self) -> char {
        match self {
            Self::General => 'k',
            Self::Advisor => 'a',
            Self::Elephant => 'b',
            Self::Horse => 'n',
            Self::Chariot => 'r',
            Self::Cannon => 'c',
            Self::Soldier => 'p',
        }
    }

    pub const fn from_fen_code(code: char) -> Option<Self> {
        match code {
            'k' => Some(Self::General),
            'a' => Some(Self::Advisor),
            'b' | 'e' => Some(Self::Elephant),
            'n' | 'h' => Some(Self::Horse),
            'r' => Some(Self::Chariot),
            'c' => Some(Self::Cannon),
            'p' => Some(Self::Soldier),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn fen_char(self) -> char {
        let code = self.kind.fen_code();
        match self.color {
            Color::Red => code.to_ascii_uppercase(),
            Color::Black => code,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_code(ch.to_ascii_lowercase())?;
        let color = if ch.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }
}

/// A cell of the 10x9 grid. Row 0 is black's back rank, row 9 red's.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + i16::from(dr)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(dc)).ok()?;
        Self::new(row, col)
    }

    pub fn parse(input: &str) -> Option<Self> {
        let (row, col) = input.split_once('-')?;
        let row = row.parse::<u8>().ok()?;
        let col = col.parse::<u8>().ok()?;
        Self::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses the `Display` form, e.g. `7-1>7-4`.
    pub fn parse(input: &str) -> Option<Self> {
        let (from, to) = input.trim().split_once('>')?;
        Some(Self::new(Square::parse(from)?, Square::parse(to)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "loser", rename_all = "camelCase")]
pub enum Outcome {
    Ongoing,
    Checkmate(Color),
    Stalemate,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => f.write_str("ongoing"),
            Self::Checkmate(loser) => write!(f, "{loser} is checkmated"),
            Self::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// A full piece set has at most 119 legal moves (two chariots and two
/// cannons at 17 each, horses 8 each, soldiers 3 each, general 4, advisors
/// and elephants 4 each), so boards within the set never fill this.
pub type MoveList = ArrayVec<Move, 256>;
