//! Piece, color and castling-right value types.
//!
//! A `Piece` is a plain (color, kind) pair. Everything else about it (its
//! symbol, whether it slides, which way it moves) is a table lookup keyed by
//! kind and, for pawns, by color.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::square_index::{Direction, EAST, NORTH, SOUTH, WEST};

/// Side owning a piece. `Empty` only appears on the empty-square piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    White,
    Black,
}

impl Color {
    /// The other side. `Empty` maps to itself.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Empty => Color::Empty,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Empty => write!(f, "none"),
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. `Empty` only appears on the empty-square piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Real piece kinds in attacker-search order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Bishops, rooks and queens slide; everything else steps once.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Lowercase letter used by FEN and UCI.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

pub const KNIGHT_DIRECTIONS: [Direction; 8] = [
    NORTH + NORTH + EAST,
    NORTH + NORTH + WEST,
    NORTH + EAST + EAST,
    NORTH + WEST + WEST,
    SOUTH + SOUTH + EAST,
    SOUTH + SOUTH + WEST,
    SOUTH + EAST + EAST,
    SOUTH + WEST + WEST,
];

pub const BISHOP_DIRECTIONS: [Direction; 4] =
    [NORTH + EAST, NORTH + WEST, SOUTH + EAST, SOUTH + WEST];

pub const ROOK_DIRECTIONS: [Direction; 4] = [NORTH, EAST, SOUTH, WEST];

pub const ROYAL_DIRECTIONS: [Direction; 8] = [
    NORTH,
    EAST,
    SOUTH,
    WEST,
    NORTH + EAST,
    NORTH + WEST,
    SOUTH + EAST,
    SOUTH + WEST,
];

/// Push, double push, then the two capture diagonals.
pub const WHITE_PAWN_DIRECTIONS: [Direction; 4] =
    [NORTH, NORTH + NORTH, NORTH + EAST, NORTH + WEST];

pub const BLACK_PAWN_DIRECTIONS: [Direction; 4] =
    [SOUTH, SOUTH + SOUTH, SOUTH + EAST, SOUTH + WEST];

/// A colored piece, or the empty-square sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        color: Color::Empty,
        kind: PieceKind::Empty,
    };

    /// Build a piece. If either half is `Empty` the result is the empty
    /// piece, so `color == Empty` holds exactly when `kind == Empty`.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::Empty, _) | (_, PieceKind::Empty) => Piece::EMPTY,
            _ => Piece { color, kind },
        }
    }

    /// Parse a FEN letter: `.` is empty, uppercase is white, lowercase black.
    pub fn from_symbol(symbol: char) -> ChessResult<Self> {
        if symbol == '.' {
            return Ok(Piece::EMPTY);
        }

        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else if symbol.is_ascii_lowercase() {
            Color::Black
        } else {
            return Err(ChessError::InvalidSymbol(symbol));
        };

        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(ChessError::InvalidSymbol(symbol)),
        };

        Ok(Piece { color, kind })
    }

    /// FEN letter with color encoded by case, `.` for empty.
    #[inline]
    pub const fn symbol(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            _ => letter,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[inline]
    pub const fn is_sliding(self) -> bool {
        self.kind.is_sliding()
    }

    /// Movement offsets. Pawns get `[push, double push, capture, capture]`
    /// for their color; the empty piece has none.
    pub fn directions(self) -> &'static [Direction] {
        match (self.kind, self.color) {
            (PieceKind::Empty, _) => &[],
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_DIRECTIONS,
            (PieceKind::Pawn, _) => &BLACK_PAWN_DIRECTIONS,
            (PieceKind::Knight, _) => &KNIGHT_DIRECTIONS,
            (PieceKind::Bishop, _) => &BISHOP_DIRECTIONS,
            (PieceKind::Rook, _) => &ROOK_DIRECTIONS,
            (PieceKind::Queen, _) | (PieceKind::King, _) => &ROYAL_DIRECTIONS,
        }
    }

    /// Chess glyph for terminal rendering.
    pub const fn unicode(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
            _ => '.',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Castling availability bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// FEN letter for each right, in canonical `KQkq` order.
pub const CASTLING_LETTERS: [(CastlingRights, char); 4] = [
    (CASTLE_WHITE_KINGSIDE, 'K'),
    (CASTLE_WHITE_QUEENSIDE, 'Q'),
    (CASTLE_BLACK_KINGSIDE, 'k'),
    (CASTLE_BLACK_QUEENSIDE, 'q'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_decode_kind_and_color() {
        let empty = Piece::from_symbol('.').expect("dot is the empty square");
        assert_eq!(empty, Piece::EMPTY);
        assert_eq!(empty.color, Color::Empty);

        let cases = [
            ('P', PieceKind::Pawn),
            ('N', PieceKind::Knight),
            ('B', PieceKind::Bishop),
            ('R', PieceKind::Rook),
            ('Q', PieceKind::Queen),
            ('K', PieceKind::King),
        ];
        for (symbol, kind) in cases {
            let white = Piece::from_symbol(symbol).expect("uppercase letter should parse");
            assert_eq!(white, Piece::new(Color::White, kind));
            assert_eq!(white.symbol(), symbol);

            let lower = symbol.to_ascii_lowercase();
            let black = Piece::from_symbol(lower).expect("lowercase letter should parse");
            assert_eq!(black, Piece::new(Color::Black, kind));
            assert_eq!(black.symbol(), lower);
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for bad in ['x', 'Z', '1', ' ', '-', 'é'] {
            assert_eq!(Piece::from_symbol(bad), Err(ChessError::InvalidSymbol(bad)));
        }
    }

    #[test]
    fn empty_color_and_kind_are_tied() {
        assert_eq!(Piece::new(Color::Empty, PieceKind::Queen), Piece::EMPTY);
        assert_eq!(Piece::new(Color::White, PieceKind::Empty), Piece::EMPTY);
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.symbol(), '.');
        assert!(Piece::EMPTY.directions().is_empty());
    }

    #[test]
    fn sliding_classification() {
        assert!(PieceKind::Bishop.is_sliding());
        assert!(PieceKind::Rook.is_sliding());
        assert!(PieceKind::Queen.is_sliding());
        assert!(!PieceKind::Pawn.is_sliding());
        assert!(!PieceKind::Knight.is_sliding());
        assert!(!PieceKind::King.is_sliding());
    }

    #[test]
    fn pawn_directions_depend_on_color() {
        let white = Piece::new(Color::White, PieceKind::Pawn).directions();
        let black = Piece::new(Color::Black, PieceKind::Pawn).directions();
        assert_eq!(white, &[-10, -20, -9, -11]);
        assert_eq!(black, &[10, 20, 11, 9]);

        let white_knight = Piece::new(Color::White, PieceKind::Knight).directions();
        let black_knight = Piece::new(Color::Black, PieceKind::Knight).directions();
        assert_eq!(white_knight, black_knight);
        assert_eq!(white_knight.len(), 8);
        assert_eq!(Piece::new(Color::White, PieceKind::Queen).directions().len(), 8);
        assert_eq!(Piece::new(Color::Black, PieceKind::Rook).directions().len(), 4);
    }

    #[test]
    fn opponent_flips_real_colors() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::Empty.opponent(), Color::Empty);
    }
}
