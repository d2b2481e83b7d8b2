use crate::types::{Color, Square};

pub const ROWS: u8 = 10;
pub const COLS: u8 = 9;
pub const NUM_SQUARES: usize = ROWS as usize * COLS as usize;

pub const PALACE_COLS: core::ops::RangeInclusive<u8> = 3..=5;

pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

/// Rows of `color`'s own half; the river lies between rows 4 and 5.
pub const fn own_half(color: Color) -> core::ops::RangeInclusive<u8> {
    match color {
        Color::Red => 5..=9,
        Color::Black => 0..=4,
    }
}

/// The three back ranks of `color`, the vertical extent of its palace.
pub const fn palace_rows(color: Color) -> core::ops::RangeInclusive<u8> {
    match color {
        Color::Red => 7..=9,
        Color::Black => 0..=2,
    }
}

pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Red => ROWS - 1,
        Color::Black => 0,
    }
}

pub const SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square::new_unchecked(0, 0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square::new_unchecked((i / COLS as usize) as u8, (i % COLS as usize) as u8);
        i += 1;
    }
    squares
};
