//! Move value type and its UCI (long algebraic) text codec.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Piece;
use crate::game_state::square_index::SquareIndex;

/// A move from one square to another, with an optional promotion piece.
///
/// Equality is structural. The promotion piece carries the mover's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: SquareIndex,
    pub to: SquareIndex,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    pub const fn new(from: SquareIndex, to: SquareIndex) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: SquareIndex, to: SquareIndex, promotion: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Long algebraic text such as `e2e4` or `g7h8q`.
    pub fn uci(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&self.from.name());
        out.push_str(&self.to.name());
        if let Some(promotion) = self.promotion {
            out.push(promotion.kind.letter());
        }
        out
    }

    /// Parse long algebraic text.
    ///
    /// A promotion letter is re-cased to match the destination rank: rank 8
    /// promotes a white piece, rank 1 a black one. This is a parsing
    /// convenience only; nothing here checks that the move is playable.
    pub fn from_uci(text: &str) -> ChessResult<Self> {
        let invalid = || ChessError::InvalidMoveText(text.to_owned());

        if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
            return Err(invalid());
        }

        let from = SquareIndex::from_name(&text[0..2]).map_err(|_| invalid())?;
        let to = SquareIndex::from_name(&text[2..4]).map_err(|_| invalid())?;

        let Some(letter) = text[4..].chars().next() else {
            return Ok(Move::new(from, to));
        };

        let letter = match to.rank() {
            8 => letter.to_ascii_uppercase(),
            1 => letter.to_ascii_lowercase(),
            _ => letter,
        };

        let promotion = Piece::from_symbol(letter).map_err(|_| invalid())?;
        if !promotion.kind.is_promotion_choice() {
            return Err(invalid());
        }

        Ok(Move::with_promotion(from, to, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uci())
    }
}
