//! Errors used throughout the position model.
//!
//! `ChessError` is the single error type returned by every boundary parser
//! (`SquareIndex::from_name`, `Piece::from_symbol`, `Move::from_uci`,
//! `Position::from_fen`). All variants are input-validation failures: they
//! are raised synchronously at the call that received the bad text and are
//! never recovered from internally.
//!
//! There is deliberately no "illegal move" variant. `Position::make_move`
//! trusts its caller to pass a move produced by `generate_moves` for the
//! current side to move.

/// Unified error type for parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Malformed FEN text. Payload describes which field failed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square name that is not a file `a..h` followed by a rank `1..8`.
    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    /// A character that does not name a piece (or `.` for an empty square).
    #[error("invalid piece symbol: {0:?}")]
    InvalidSymbol(char),

    /// Malformed UCI move text.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),
}

/// Convenience alias used by the parsing entry points.
pub type ChessResult<T> = Result<T, ChessError>;
