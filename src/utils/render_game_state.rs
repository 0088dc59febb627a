//! Terminal-oriented Unicode board renderer.

use crate::game_state::position::Position;
use crate::game_state::square_index::SQUARES;

/// Render the board with file and rank labels, rank 8 at the top.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in SQUARES.chunks(8) {
        let label = char::from(b'0' + rank[0].rank());
        out.push(label);
        out.push(' ');

        for (file, square) in rank.iter().enumerate() {
            let piece = position.piece_at(*square);
            out.push(if piece.is_empty() { '·' } else { piece.unicode() });

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
