//! GameState-to-FEN serializer, the inverse of `fen_parser`.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state),
        side_to_move,
        generate_castling_field(game_state.castling_rights),
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for rank in (1..=8u8).rev() {
        let mut empty_count = 0u8;

        for file in 1..=8u8 {
            match game_state.get(Square::new(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 1 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(right, _)| rights & right != 0)
    .map(|(_, symbol)| symbol)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn new_game_serializes_to_starting_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_preserves_text_and_layout() {
        for fen in [
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "8/8/8/8/8/8/8/k6K b - - 99 120",
        ] {
            let parsed = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&parsed), fen);

            let reparsed = parse_fen(&generate_fen(&parsed)).expect("generated FEN should parse");
            for index in 0..64u8 {
                let square = Square::from_index(index);
                assert_eq!(reparsed.get(square), parsed.get(square), "square {square} in {fen}");
            }
        }
    }

    #[test]
    fn partial_castling_rights_keep_their_order() {
        let mut game_state = GameState::new_game();
        game_state.castling_rights = CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE;
        assert!(generate_fen(&game_state).contains(" w Qk - "));
    }
}
