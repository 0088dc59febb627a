//! Leaf-node counting over legal moves.
//!
//! Used to validate the generator against published node counts. The
//! position is walked with make/unmake and is unchanged on return.

use tracing::debug;

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Number of leaf positions reachable in exactly `depth` legal plies.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        position.make_move(mv);
        nodes += perft(position, depth - 1);
        position.unmake_move();
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let divided: Vec<(Move, u64)> = position
        .legal_moves()
        .into_iter()
        .map(|mv| {
            position.make_move(mv);
            let nodes = perft(position, depth - 1);
            position.unmake_move();
            (mv, nodes)
        })
        .collect();

    debug!(
        depth,
        root_moves = divided.len(),
        nodes = divided.iter().map(|(_, n)| n).sum::<u64>(),
        "perft divide finished"
    );
    divided
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::position::Position;

    #[test]
    fn perft_from_starting_position() {
        let mut position = Position::new();
        let expected = [1, 20, 400, 8902];

        for (depth, nodes) in expected.iter().enumerate() {
            assert_eq!(perft(&mut position, depth as u8), *nodes, "depth {depth}");
        }
        assert_eq!(position.fen(), STARTING_POSITION_FEN);
        assert_eq!(position.history_len(), 0);
    }

    #[test]
    fn perft_endgame_with_en_passant_and_checks() {
        let mut position = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("endgame FEN should parse");

        assert_eq!(perft(&mut position, 1), 14);
        assert_eq!(perft(&mut position, 2), 191);
        assert_eq!(perft(&mut position, 3), 2812);
    }

    #[test]
    fn perft_castling_promotion_and_pin_positions() {
        let cases: [(&str, [u64; 2]); 4] = [
            (
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
                [48, 2039],
            ),
            (
                "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
                [6, 264],
            ),
            (
                "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
                [44, 1486],
            ),
            (
                "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
                [46, 2079],
            ),
        ];

        for (fen, expected) in cases {
            let mut position = Position::from_fen(fen).expect("perft FEN should parse");
            for (depth, nodes) in expected.iter().enumerate() {
                let depth = depth as u8 + 1;
                assert_eq!(perft(&mut position, depth), *nodes, "{fen} depth {depth}");
            }
            assert_eq!(position.fen(), fen);
        }
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut position = Position::new();
        let divided = perft_divide(&mut position, 2);

        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
