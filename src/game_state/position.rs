//! Mailbox position representation.
//!
//! `Position` owns a 120-cell board (see `square_index`), the side to move,
//! castling rights, en-passant target, clocks and an undo stack. Move
//! generation, make/unmake and attacker search live in `move_generation`;
//! FEN text conversion lives in `utils`.

use std::fmt;

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::square_index::{SquareIndex, BOARD_CELLS, SQUARES};
use crate::game_state::undo_state::{PositionState, UndoState};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Sentinel border cell; never holds a piece.
    OffBoard,
    /// Playing-area cell holding a piece or `Piece::EMPTY`.
    Playable(Piece),
}

/// Fixed-size extended grid.
pub type Board = [Cell; BOARD_CELLS];

/// A board with every playable cell empty.
pub fn empty_board() -> Board {
    let mut board = [Cell::OffBoard; BOARD_CELLS];
    for square in SQUARES {
        board[square.index()] = Cell::Playable(Piece::EMPTY);
    }
    board
}

/// A chess position with its own undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn may capture onto en passant (behind the pushed pawn).
    pub ep_square: Option<SquareIndex>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u32,
    /// Starts at 1, incremented after Black moves.
    pub move_number: u32,
    pub undo_stack: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }
}

impl Position {
    /// The standard starting position.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// No pieces, white to move, no rights, clocks at their initial values.
    pub fn new_empty() -> Self {
        Position {
            board: empty_board(),
            turn: Color::White,
            castling_rights: 0,
            ep_square: None,
            halfmove_clock: 0,
            move_number: 1,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Replace this position's state with `fen`, discarding history. On
    /// error the position is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> ChessResult<()> {
        *self = parse_fen(fen)?;
        debug!(fen, "position reset from FEN");
        Ok(())
    }

    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`, `Piece::EMPTY` if none.
    #[inline]
    pub fn piece_at(&self, square: SquareIndex) -> Piece {
        match self.board[square.index()] {
            Cell::Playable(piece) => piece,
            Cell::OffBoard => Piece::EMPTY,
        }
    }

    #[inline]
    pub fn set_piece(&mut self, piece: Piece, square: SquareIndex) {
        self.board[square.index()] = Cell::Playable(piece);
    }

    #[inline]
    pub fn remove_piece(&mut self, square: SquareIndex) {
        self.board[square.index()] = Cell::Playable(Piece::EMPTY);
    }

    /// Owned copy of everything but the history.
    pub fn snapshot(&self) -> PositionState {
        PositionState {
            board: self.board,
            turn: self.turn,
            castling_rights: self.castling_rights,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
            move_number: self.move_number,
        }
    }

    pub(crate) fn restore(&mut self, state: PositionState) {
        self.board = state.board;
        self.turn = state.turn;
        self.castling_rights = state.castling_rights;
        self.ep_square = state.ep_square;
        self.halfmove_clock = state.halfmove_clock;
        self.move_number = state.move_number;
    }

    /// Most recent move still on the undo stack.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Moves played since the position was loaded, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo_stack.iter().map(|undo| undo.mv)
    }
}

/// Eight lines of FEN symbols, rank 8 first, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in SQUARES.iter().enumerate() {
            write!(f, "{}", self.piece_at(*square).symbol())?;
            if (i + 1) % 8 == 0 && i < 63 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
