use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_move_shared::{not_friendly, push_targets};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let targets = not_friendly(game_state, knight_targets(from));
    push_targets(from, targets, MoveFlag::None, out);
}
