//! Attacker search and check detection.
//!
//! The search runs outward from the target square using each piece kind's
//! own direction table, so no separate attack tables are needed. Pawn
//! capture diagonals are negated because the walk starts at the victim.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_index::{Direction, SquareIndex, SQUARES};

impl Position {
    /// Squares holding a `color` piece that attacks `target`, whoever is to
    /// move. Ordered by piece kind (pawn first, king last), then by
    /// direction.
    pub fn find_attackers(&self, color: Color, target: SquareIndex) -> Vec<SquareIndex> {
        let mut attackers = Vec::new();

        for kind in PieceKind::ALL {
            let attacker = Piece::new(color, kind);
            for direction in attack_directions(attacker) {
                let mut current = target;
                while let Some(next) = current.offset(direction) {
                    let occupant = self.piece_at(next);
                    if occupant == attacker {
                        attackers.push(next);
                        break;
                    }
                    if !occupant.is_empty() || !attacker.is_sliding() {
                        break;
                    }
                    current = next;
                }
            }
        }

        attackers
    }

    #[inline]
    pub fn is_attacked(&self, color: Color, target: SquareIndex) -> bool {
        !self.find_attackers(color, target).is_empty()
    }

    /// First square (in FEN order) holding `color`'s king.
    pub fn find_king(&self, color: Color) -> Option<SquareIndex> {
        let king = Piece::new(color, PieceKind::King);
        SQUARES
            .iter()
            .copied()
            .find(|square| self.piece_at(*square) == king)
    }

    /// True when the side to move's king is attacked. A position without
    /// that king is never in check.
    pub fn is_check(&self) -> bool {
        self.find_king(self.turn)
            .is_some_and(|king| self.is_attacked(self.turn.opponent(), king))
    }
}

/// Directions to walk from a target to find `attacker`.
fn attack_directions(attacker: Piece) -> impl Iterator<Item = Direction> {
    let directions = attacker.directions();
    let is_pawn = attacker.kind == PieceKind::Pawn;
    // Pawn tables are [push, double push, capture, capture].
    let skip = if is_pawn { 2 } else { 0 };
    directions
        .iter()
        .skip(skip)
        .map(move |&direction| if is_pawn { -direction } else { direction })
}
