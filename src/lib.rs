//! Crate root module declarations for the tetra position model.
//!
//! `tetra` models a chess position on a 10x12 mailbox board, generates
//! pseudo-legal moves for the side to move, applies and reverts moves
//! exactly, answers attack and check queries, and converts positions and
//! moves to and from FEN and UCI text.
//!
//! ```
//! use tetra::{Move, Position};
//!
//! let mut position = Position::new();
//! assert_eq!(position.generate_moves().len(), 20);
//!
//! let mv = Move::from_uci("e2e4").unwrap();
//! position.make_move(mv);
//! assert_eq!(
//!     position.fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! position.unmake_move();
//! assert_eq!(position, Position::new());
//! ```

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod square_index;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod attacks;
    pub mod legal_filter;
    pub mod make_unmake;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{Color, Piece, PieceKind};
pub use game_state::position::Position;
pub use game_state::square_index::SquareIndex;
pub use moves::chess_move::Move;
