//! 10x12 mailbox square indexing.
//!
//! The playing area sits inside a 120-cell grid with a sentinel border, so a
//! direction step that walks off the board lands on a cell outside the
//! playable set. Row 2 holds rank 8 and row 9 holds rank 1; columns 1..=8 hold
//! files a..h. Rows 0, 1, 10, 11 and columns 0, 9 are sentinels.
//!
//! ```text
//!  a8 = 21 ... h8 = 28
//!  a1 = 91 ... h1 = 98
//! ```

use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Number of cells in the extended grid.
pub const BOARD_CELLS: usize = 120;

/// Signed step between two grid cells.
pub type Direction = i8;

pub const NORTH: Direction = -10;
pub const EAST: Direction = 1;
pub const SOUTH: Direction = 10;
pub const WEST: Direction = -1;

/// A coordinate into the extended grid. Only on-board values can be built
/// outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareIndex(u8);

macro_rules! square_constants {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(pub const $name: SquareIndex = SquareIndex($index);)*
    };
}

square_constants! {
    A8 = 21, B8 = 22, C8 = 23, D8 = 24, E8 = 25, F8 = 26, G8 = 27, H8 = 28,
    A7 = 31, B7 = 32, C7 = 33, D7 = 34, E7 = 35, F7 = 36, G7 = 37, H7 = 38,
    A6 = 41, B6 = 42, C6 = 43, D6 = 44, E6 = 45, F6 = 46, G6 = 47, H6 = 48,
    A5 = 51, B5 = 52, C5 = 53, D5 = 54, E5 = 55, F5 = 56, G5 = 57, H5 = 58,
    A4 = 61, B4 = 62, C4 = 63, D4 = 64, E4 = 65, F4 = 66, G4 = 67, H4 = 68,
    A3 = 71, B3 = 72, C3 = 73, D3 = 74, E3 = 75, F3 = 76, G3 = 77, H3 = 78,
    A2 = 81, B2 = 82, C2 = 83, D2 = 84, E2 = 85, F2 = 86, G2 = 87, H2 = 88,
    A1 = 91, B1 = 92, C1 = 93, D1 = 94, E1 = 95, F1 = 96, G1 = 97, H1 = 98,
}

/// Every playable square in FEN order (a8..h8, a7..h7, ..., a1..h1).
pub const SQUARES: [SquareIndex; 64] = [
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
];

/// True when a raw grid index lies inside the 8x8 playing area.
#[inline]
pub const fn is_on_board(raw: i16) -> bool {
    if raw < 0 || raw >= BOARD_CELLS as i16 {
        return false;
    }
    let row = raw / 10;
    let column = raw % 10;
    row >= 2 && row <= 9 && column >= 1 && column <= 8
}

impl SquareIndex {
    /// Build from a raw grid index, returning `None` for sentinel cells.
    #[inline]
    pub const fn new(raw: u8) -> Option<Self> {
        if is_on_board(raw as i16) {
            Some(SquareIndex(raw))
        } else {
            None
        }
    }

    /// Build from zero-based file (`0 == a`) and one-based rank (`1..=8`).
    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Self> {
        if file > 7 || rank < 1 || rank > 8 {
            return None;
        }
        Some(SquareIndex((10 - rank) * 10 + file + 1))
    }

    /// Parse a square name such as `e4`.
    pub fn from_name(name: &str) -> ChessResult<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(name.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(name.to_owned()));
        }

        Self::from_file_rank(file - b'a', rank - b'0')
            .ok_or_else(|| ChessError::InvalidSquare(name.to_owned()))
    }

    /// Raw position inside the 120-cell grid.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file(self) -> char {
        (b'a' + self.0 % 10 - 1) as char
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub const fn rank(self) -> u8 {
        10 - self.0 / 10
    }

    /// Two-character name such as `e4`.
    pub fn name(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Step by `direction`, or `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, direction: Direction) -> Option<Self> {
        let raw = self.0 as i16 + direction as i16;
        if is_on_board(raw) {
            Some(SquareIndex(raw as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for SquareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
