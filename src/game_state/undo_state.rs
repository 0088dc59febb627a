use crate::game_state::chess_types::*;
use crate::game_state::position::Board;
use crate::game_state::square_index::SquareIndex;
use crate::moves::chess_move::Move;

/// Every observable field of a position, minus its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionState {
    pub board: Board,
    pub turn: Color,
    pub castling_rights: CastlingRights,
    pub ep_square: Option<SquareIndex>,
    pub halfmove_clock: u32,
    pub move_number: u32,
}

/// Single undo record for `make_move` / `unmake_move`: the move that was
/// played and the full state from before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub previous: PositionState,
}
