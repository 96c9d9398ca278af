use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;

/// Pushes one move per set bit of `targets`, all carrying `flag`.
#[inline]
pub fn push_targets(from: Square, targets: u64, flag: MoveFlag, out: &mut MoveList) {
    for to in squares_of(targets) {
        out.push(Move::new(from, to, flag));
    }
}

/// Target squares not occupied by the side to move.
#[inline]
pub fn not_friendly(game_state: &GameState, targets: u64) -> u64 {
    targets & !game_state.occupancy(game_state.side_to_move)
}
