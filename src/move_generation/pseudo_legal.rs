//! Pseudo-legal move generation.
//!
//! Every friendly piece walks each of its directions; sliders continue
//! until blocked, everything else stops after one step. Pawns get extra
//! gating for pushes, captures, en passant and promotion. Castling is
//! appended last and is the only move class checked for king safety: an
//! ordinary move that leaves the mover's king attacked is still returned.
//! Use `legal_moves` for a fully filtered list.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_index::{Direction, SquareIndex, SQUARES};
use crate::moves::chess_move::Move;

impl Position {
    /// All pseudo-legal moves for the side to move, in board order
    /// (a8..h1), then direction order, then distance, then castling.
    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for from in SQUARES {
            let piece = self.piece_at(from);
            if piece.is_empty() || piece.color != self.turn {
                continue;
            }

            for &direction in piece.directions() {
                self.walk_direction(from, piece, direction, &mut moves);
            }
        }

        self.push_castling_moves(&mut moves);
        moves
    }

    fn walk_direction(
        &self,
        from: SquareIndex,
        piece: Piece,
        direction: Direction,
        moves: &mut Vec<Move>,
    ) {
        let opponent = self.turn.opponent();
        let mut current = from;

        while let Some(to) = current.offset(direction) {
            let target = self.piece_at(to);

            if target.color == piece.color {
                break;
            }

            if piece.kind == PieceKind::Pawn
                && !self.pawn_step_allowed(from, to, piece, direction)
            {
                break;
            }

            if piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(piece.color) {
                for kind in PieceKind::PROMOTIONS {
                    moves.push(Move::with_promotion(from, to, Piece::new(piece.color, kind)));
                }
                break;
            }

            moves.push(Move::new(from, to));

            if target.color == opponent || !piece.is_sliding() {
                break;
            }
            current = to;
        }
    }

    fn pawn_step_allowed(
        &self,
        from: SquareIndex,
        to: SquareIndex,
        pawn: Piece,
        direction: Direction,
    ) -> bool {
        let forward = pawn_forward(pawn.color);
        let target = self.piece_at(to);

        if direction == forward {
            target.is_empty()
        } else if direction == forward * 2 {
            from.rank() == pawn_home_rank(pawn.color)
                && target.is_empty()
                && from
                    .offset(forward)
                    .is_some_and(|between| self.piece_at(between).is_empty())
        } else {
            target.color == pawn.color.opponent() || self.ep_square == Some(to)
        }
    }

    fn push_castling_moves(&self, moves: &mut Vec<Move>) {
        let opponent = self.turn.opponent();
        let mut in_check = None;

        for castle in &CASTLING_MOVES {
            if castle.color != self.turn || self.castling_rights & castle.right == 0 {
                continue;
            }
            if !castle
                .must_be_empty
                .iter()
                .all(|square| self.piece_at(*square).is_empty())
            {
                continue;
            }
            if *in_check.get_or_insert_with(|| self.is_attacked(opponent, castle.king_from)) {
                continue;
            }
            if castle
                .must_be_safe
                .iter()
                .any(|square| self.is_attacked(opponent, *square))
            {
                continue;
            }

            moves.push(Move::new(castle.king_from, castle.king_to));
        }
    }
}
