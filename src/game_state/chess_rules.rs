//! Canonical chess-rule constants.
//!
//! Starting position, pawn home and promotion ranks, and the four fixed
//! castling moves with the squares each one needs empty and unattacked.

use crate::game_state::chess_types::*;
use crate::game_state::square_index::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank a pawn of `color` starts on and may double-push from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
        Color::Empty => 0,
    }
}

/// Rank on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
        Color::Empty => 0,
    }
}

/// Single forward step for a pawn of `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> Direction {
    match color {
        Color::Black => SOUTH,
        _ => NORTH,
    }
}

/// One of the four fixed castling moves.
#[derive(Debug, Clone, Copy)]
pub struct CastlingMove {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: SquareIndex,
    pub king_to: SquareIndex,
    pub rook_from: SquareIndex,
    pub rook_to: SquareIndex,
    /// Squares strictly between king and rook.
    pub must_be_empty: &'static [SquareIndex],
    /// Squares the king crosses or lands on.
    pub must_be_safe: &'static [SquareIndex],
}

/// Castling moves in `KQkq` order.
pub const CASTLING_MOVES: [CastlingMove; 4] = [
    CastlingMove {
        right: CASTLE_WHITE_KINGSIDE,
        color: Color::White,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        rook_to: F1,
        must_be_empty: &[F1, G1],
        must_be_safe: &[F1, G1],
    },
    CastlingMove {
        right: CASTLE_WHITE_QUEENSIDE,
        color: Color::White,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        rook_to: D1,
        must_be_empty: &[D1, C1, B1],
        must_be_safe: &[D1, C1],
    },
    CastlingMove {
        right: CASTLE_BLACK_KINGSIDE,
        color: Color::Black,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        rook_to: F8,
        must_be_empty: &[F8, G8],
        must_be_safe: &[F8, G8],
    },
    CastlingMove {
        right: CASTLE_BLACK_QUEENSIDE,
        color: Color::Black,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        rook_to: D8,
        must_be_empty: &[D8, C8, B8],
        must_be_safe: &[D8, C8],
    },
];

/// The castling move whose king travels `from -> to`, if any.
pub fn castling_move_for(from: SquareIndex, to: SquareIndex) -> Option<&'static CastlingMove> {
    CASTLING_MOVES
        .iter()
        .find(|castle| castle.king_from == from && castle.king_to == to)
}

/// Rights lost when a piece leaves, or is captured on, `square`.
#[inline]
pub fn rights_tied_to_rook_square(square: SquareIndex) -> CastlingRights {
    match square {
        H1 => CASTLE_WHITE_KINGSIDE,
        A1 => CASTLE_WHITE_QUEENSIDE,
        H8 => CASTLE_BLACK_KINGSIDE,
        A8 => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

/// Both rights belonging to `color`.
#[inline]
pub const fn rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        Color::Empty => 0,
    }
}
