//! Reversible move application.
//!
//! `make_move` pushes the move together with a full snapshot of the state
//! before it, then mutates in place. `unmake_move` pops that record and
//! restores the snapshot verbatim, so the pair is an exact inverse.

use tracing::trace;

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;

impl Position {
    /// Apply `mv` for the side to move.
    ///
    /// `mv` must come from `generate_moves` on this exact position; nothing
    /// here checks legality, and any other move leaves the state
    /// inconsistent.
    ///
    /// Castling rights are revoked when the king moves, when a rook leaves
    /// its home square, and also when a rook is captured on its home
    /// square. The last rule goes beyond the king/rook-move rules alone:
    /// after `g7h8q` captures the h8 rook the FEN shows `KQq`, not `KQkq`.
    /// The clocks saturate at `u32::MAX` instead of overflowing.
    pub fn make_move(&mut self, mv: Move) {
        self.undo_stack.push(UndoState {
            mv,
            previous: self.snapshot(),
        });

        let mover = self.turn;
        let moved = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);

        self.remove_piece(mv.from);
        self.set_piece(mv.promotion.unwrap_or(moved), mv.to);

        if moved.kind == PieceKind::Pawn && self.ep_square == Some(mv.to) {
            if let Some(victim) = mv.to.offset(-pawn_forward(mover)) {
                self.remove_piece(victim);
            }
        }

        if moved.kind == PieceKind::King {
            if let Some(castle) = castling_move_for(mv.from, mv.to) {
                let rook = self.piece_at(castle.rook_from);
                self.remove_piece(castle.rook_from);
                self.set_piece(rook, castle.rook_to);
            }
            self.castling_rights &= !rights_of(mover);
        }
        if moved.kind == PieceKind::Rook {
            self.castling_rights &= !(rights_tied_to_rook_square(mv.from) & rights_of(mover));
        }
        // A rook captured at home takes its right with it.
        self.castling_rights &= !rights_tied_to_rook_square(mv.to);

        let forward = pawn_forward(mover);
        self.ep_square = if moved.kind == PieceKind::Pawn
            && mv.to.index() as i16 - mv.from.index() as i16 == 2 * forward as i16
        {
            mv.from.offset(forward)
        } else {
            None
        };

        if moved.kind == PieceKind::Pawn || captured.color == mover.opponent() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if mover == Color::Black {
            self.move_number = self.move_number.saturating_add(1);
        }

        self.turn = mover.opponent();

        trace!(mv = %mv, ply = self.undo_stack.len(), "made move");
    }

    /// Undo the most recent `make_move`.
    ///
    /// # Panics
    ///
    /// Panics if there is no move to undo. Callers only unmake moves they
    /// made, so an empty history is a programming error.
    pub fn unmake_move(&mut self) -> Move {
        let Some(UndoState { mv, previous }) = self.undo_stack.pop() else {
            panic!("unmake_move called with an empty undo history");
        };

        self.restore(previous);
        trace!(mv = %mv, ply = self.undo_stack.len(), "unmade move");
        mv
    }
}
