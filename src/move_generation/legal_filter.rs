use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

impl Position {
    /// Pseudo-legal moves that do not leave the mover's own king attacked.
    ///
    /// Each candidate is made and unmade, so the position is unchanged on
    /// return. `generate_moves` itself stays pseudo-legal.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.turn;
        let mut legal = Vec::new();

        for mv in self.generate_moves() {
            self.make_move(mv);
            let exposed = self
                .find_king(mover)
                .is_some_and(|king| self.is_attacked(mover.opponent(), king));
            self.unmake_move();

            if !exposed {
                legal.push(mv);
            }
        }

        legal
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_moves_are_all_legal() {
        let mut position = Position::new();
        assert_eq!(position.legal_moves(), position.generate_moves());
    }

    #[test]
    fn checkmated_side_has_no_legal_moves() {
        let mut mated =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("fool's mate FEN should parse");
        assert!(!mated.generate_moves().is_empty());
        assert!(mated.legal_moves().is_empty());
        assert_eq!(mated.history_len(), 0);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut position = Position::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1")
            .expect("rook-cut FEN should parse");
        let legal: Vec<String> = position.legal_moves().iter().map(|mv| mv.uci()).collect();
        assert_eq!(legal, ["e1f1", "e1d1"]);
    }
}
