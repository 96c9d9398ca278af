//! FEN-to-GameState parser.
//!
//! Builds a position from Forsyth-Edwards Notation: placement, side to move,
//! castling rights, en-passant target and both clocks. All six fields are
//! required. Placements must hold exactly one king and at most 16 pieces per
//! color, which keeps every position inside the move buffer's bound.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

const FEN_FIELD_COUNT: usize = 6;
const MAX_PIECES_PER_COLOR: u32 = 16;

/// Loads a position from FEN text.
#[inline]
pub fn load_position(fen: &str) -> ChessResult<GameState> {
    parse_fen(fen)
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != FEN_FIELD_COUNT {
        return Err(invalid(format!(
            "expected {FEN_FIELD_COUNT} fields, found {} in {fen:?}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();
    parse_board(fields[0], &mut game_state)?;
    check_piece_counts(&game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3], &game_state)?;
    game_state.halfmove_clock = parse_clock(fields[4], "halfmove clock")?;
    game_state.fullmove_number = parse_clock(fields[5], "fullmove number")?;

    Ok(game_state)
}

#[inline]
fn invalid(reason: String) -> ChessError {
    ChessError::InvalidFen(reason)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (rank, rank_text) in (1..=8u8).rev().zip(ranks) {
        let mut file = 1u8;

        for ch in rank_text.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 9 {
                    return Err(invalid(format!("rank {rank} has more than 8 files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if file > 8 {
                return Err(invalid(format!("rank {rank} has more than 8 files")));
            }
            game_state.add(Square::new(rank, file), piece);
            file += 1;
        }

        if file != 9 {
            return Err(invalid(format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(())
}

fn check_piece_counts(game_state: &GameState) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = game_state.pieces_of(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(invalid(format!("{color:?} must have exactly one king, found {kings}")));
        }

        let pieces = game_state.occupancy(color).count_ones();
        if pieces > MAX_PIECES_PER_COLOR {
            return Err(invalid(format!(
                "{color:?} has {pieces} pieces, at most {MAX_PIECES_PER_COLOR} allowed"
            )));
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(format!("invalid castling character '{ch}'"))),
        };
        Ok(rights | right)
    })
}

/// The target must be the empty square a double push just skipped.
fn parse_en_passant_square(
    en_passant_part: &str,
    game_state: &GameState,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square '{en_passant_part}'")))?;

    let target_rank = match game_state.side_to_move {
        Color::White => 6,
        Color::Black => 3,
    };
    if square.rank() != target_rank {
        return Err(invalid(format!(
            "en-passant square '{en_passant_part}' must be on rank {target_rank}"
        )));
    }
    if game_state.occupancy_all & square.bit() != 0 {
        return Err(invalid(format!("en-passant square '{en_passant_part}' is occupied")));
    }

    Ok(Some(square))
}

fn parse_clock(text: &str, field: &str) -> ChessResult<u16> {
    text.parse::<u16>()
        .map_err(|_| invalid(format!("{field} is not a number: '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::{load_position, parse_fen};
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn parses_starting_position() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
    }

    #[test]
    fn parses_rights_en_passant_and_clocks() {
        let game_state =
            load_position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w Kq f6 0 3")
                .expect("FEN should parse");
        assert_eq!(game_state.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(game_state.en_passant_square, Some(Square::new(6, 6)));
        assert_eq!(game_state.fullmove_number, 3);
        assert_eq!(
            game_state.get(Square::new(5, 5)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            game_state.get(Square::new(8, 4)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn places_every_square_from_the_layout() {
        let game_state = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(game_state.occupancy_all.count_ones(), 32);
        assert_eq!(
            game_state.get(Square::new(3, 6)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            game_state.get(Square::new(6, 1)),
            Some(Piece::new(PieceKind::Bishop, Color::Black))
        );
        assert_eq!(game_state.get(Square::new(4, 4)), None);
    }

    #[test]
    fn rejects_wrong_field_count() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_piece_letter() {
        let err = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1")
            .expect_err("X is not a piece");
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn rejects_non_numeric_clocks() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 -1").is_err());
    }

    #[test]
    fn rejects_malformed_en_passant_square() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e 0 1").is_err());
    }

    #[test]
    fn rejects_en_passant_target_off_the_skipped_rank_or_occupied() {
        assert!(parse_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").is_ok());
        assert!(parse_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").is_ok());

        for fen in [
            "4k3/8/4N3/3Pp3/8/8/8/4K3 w - e6 0 1",
            "4k3/8/8/3Pp3/8/8/8/4K3 w - e5 0 1",
            "4k3/8/8/3Pp3/8/8/8/4K3 b - e6 0 1",
            "4k3/8/8/8/3pP3/8/8/4K3 w - e3 0 1",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_placements_without_exactly_one_king_per_color() {
        for fen in [
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
            "3kk3/8/8/8/8/8/8/4K3 b - - 0 1",
        ] {
            let err = parse_fen(fen).expect_err("king count should be checked");
            assert!(err.to_string().contains("exactly one king"), "{fen:?}: {err}");
        }
    }

    #[test]
    fn rejects_more_than_sixteen_pieces_per_color() {
        let err = parse_fen("QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/kQQQQQQK w - - 0 1")
            .expect_err("a queen swarm is not a position");
        assert!(matches!(err, ChessError::InvalidFen(_)));
        assert!(err.to_string().contains("at most 16"));

        let full_army = parse_fen("4k3/8/8/8/8/1Q6/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(matches!(full_army, Err(ChessError::InvalidFen(_))));
        assert!(parse_fen(STARTING_POSITION_FEN).is_ok());
    }

    #[test]
    fn rejects_bad_rank_layouts() {
        assert!(parse_fen("4k3/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k4/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k2/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").is_err());
    }
}
