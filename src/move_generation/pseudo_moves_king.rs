//! King steps and castling.
//!
//! Castling needs the opponent's attack set, which is produced by running the
//! generator for the opponent in attacking mode. Attacking mode never emits
//! castling, so the recursion is one level deep.

use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::attacked_squares;
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_legal::GenerationOptions;
use crate::move_generation::pseudo_move_shared::{not_friendly, push_targets};
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    options: GenerationOptions,
    out: &mut MoveList,
) {
    let targets = not_friendly(game_state, king_targets(from));
    push_targets(from, targets, MoveFlag::BreaksCastlingRights, out);

    if !options.only_attacking {
        generate_castling_moves(game_state, from, out);
    }
}

fn generate_castling_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let side = game_state.side_to_move;
    if from != king_home(side) {
        return;
    }

    let rook = Piece::new(PieceKind::Rook, side);
    let kingside = game_state.has_castling_right(kingside_right(side))
        && game_state.get(kingside_rook_home(side)) == Some(rook)
        && squares_empty(game_state, from, &[1, 2]);
    let queenside = game_state.has_castling_right(queenside_right(side))
        && game_state.get(queenside_rook_home(side)) == Some(rook)
        && squares_empty(game_state, from, &[-1, -2, -3]);
    if !kingside && !queenside {
        return;
    }

    let attacked = attacked_squares(game_state, side.opposite());
    let safe = |file_deltas: &[i8]| {
        file_deltas.iter().all(|&delta| {
            from.offset(0, delta)
                .is_some_and(|square| attacked & square.bit() == 0)
        })
    };

    if kingside && safe(&[0, 1, 2]) {
        if let Some(to) = from.offset(0, 2) {
            out.push(Move::new(from, to, MoveFlag::CastleKingside));
        }
    }
    if queenside && safe(&[0, -1, -2]) {
        if let Some(to) = from.offset(0, -2) {
            out.push(Move::new(from, to, MoveFlag::CastleQueenside));
        }
    }
}

fn squares_empty(game_state: &GameState, from: Square, file_deltas: &[i8]) -> bool {
    file_deltas.iter().all(|&delta| {
        from.offset(0, delta)
            .is_some_and(|square| game_state.occupancy_all & square.bit() == 0)
    })
}
