//! FEN-to-Position parser.
//!
//! Validates all six fields and builds a fresh `Position` with an empty
//! undo history.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_index::{SquareIndex, SQUARES};

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields[..]
    else {
        return Err(ChessError::InvalidFen(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    };

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    position.turn = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.ep_square = parse_en_passant_square(en_passant_part)?;
    position.halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    position.move_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid move number: {fullmove_part}")))?;

    debug!(fen, "parsed FEN");
    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(format!(
            "board must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if run == 0 {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += run as usize;
            } else {
                let piece = match Piece::from_symbol(ch) {
                    Ok(piece) if !piece.is_empty() => piece,
                    _ => {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid piece character '{ch}' in board layout"
                        )))
                    }
                };
                if file >= 8 {
                    return Err(ChessError::InvalidFen(format!(
                        "rank {} has more than 8 files",
                        8 - rank_idx
                    )));
                }
                position.set_piece(piece, SQUARES[rank_idx * 8 + file]);
                file += 1;
            }

            if file > 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has more than 8 files",
                    8 - rank_idx
                )));
            }
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} covers {file} files, expected 8",
                8 - rank_idx
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let Some((flag, _)) = CASTLING_LETTERS.iter().find(|(_, letter)| *letter == ch) else {
            return Err(ChessError::InvalidFen(format!(
                "invalid castling rights character: {ch}"
            )));
        };
        rights |= flag;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<SquareIndex>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    SquareIndex::from_name(en_passant_part)
        .map(Some)
        .map_err(|_| {
            ChessError::InvalidFen(format!("invalid en-passant square: {en_passant_part}"))
        })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::square_index::{D6, E5, E8};

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.turn, Color::White);
        assert_eq!(position.castling_rights, CASTLE_ALL);
        assert_eq!(position.move_number, 1);
        assert_eq!(position.halfmove_clock, 0);
        assert!(position.undo_stack.is_empty());
    }

    #[test]
    fn parse_en_passant_and_partial_rights() {
        let position = parse_fen("rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w Kq d6 0 3")
            .expect("en-passant FEN should parse");

        assert_eq!(position.ep_square, Some(D6));
        assert_eq!(
            position.castling_rights,
            CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert_eq!(position.piece_at(E5), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(position.piece_at(E8), Piece::new(Color::Black, PieceKind::King));
        assert_eq!(position.move_number, 3);
    }

    #[test]
    fn rejects_malformed_fen() {
        let bad_inputs = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1",
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppp.ppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one",
        ];

        for fen in bad_inputs {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
