use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_index::{SquareIndex, SQUARES};

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.turn {
        Color::Black => "b",
        _ => "w",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position.ep_square);

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, position.halfmove_clock, position.move_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for (rank_idx, rank) in SQUARES.chunks(8).enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            let piece = position.piece_at(*square);
            if piece.is_empty() {
                empty_count += 1;
                continue;
            }
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }
            out.push(piece.symbol());
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank_idx < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = CASTLING_LETTERS
        .iter()
        .filter(|(flag, _)| rights & flag != 0)
        .map(|(_, letter)| *letter)
        .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn generate_en_passant_field(square: Option<SquareIndex>) -> String {
    square.map_or_else(|| "-".to_owned(), SquareIndex::name)
}
