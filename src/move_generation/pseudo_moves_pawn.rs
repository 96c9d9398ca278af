//! Pawn pushes, double pushes, diagonal captures, en passant and promotion.
//!
//! Promotions are emitted with `PromoteQueen` only. Callers that want the
//! under-promotions derive them with `Move::with_promotion`.

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_legal::GenerationOptions;
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    options: GenerationOptions,
    out: &mut MoveList,
) {
    let side = game_state.side_to_move;
    let direction = side.pawn_direction();
    let arrival_flag = |to: Square| {
        if to.rank() == promotion_rank(side) {
            MoveFlag::PromoteQueen
        } else {
            MoveFlag::None
        }
    };

    if !options.only_attacking {
        if let Some(one) = from.offset(direction, 0) {
            if game_state.occupancy_all & one.bit() == 0 {
                out.push(Move::new(from, one, arrival_flag(one)));

                if from.rank() == pawn_start_rank(side) {
                    if let Some(two) = one.offset(direction, 0) {
                        if game_state.occupancy_all & two.bit() == 0 {
                            out.push(Move::new(from, two, MoveFlag::PawnDoublePush));
                        }
                    }
                }
            }
        }
    }

    let enemies = game_state.occupancy(side.opposite());
    let friends = game_state.occupancy(side);
    for to in squares_of(pawn_capture_targets(side, from)) {
        if game_state.en_passant_square == Some(to) {
            out.push(Move::new(from, to, MoveFlag::EnPassant));
        } else if enemies & to.bit() != 0 {
            out.push(Move::new(from, to, arrival_flag(to)));
        } else if options.only_attacking && friends & to.bit() == 0 {
            out.push(Move::new(from, to, MoveFlag::None));
        }
    }
}
