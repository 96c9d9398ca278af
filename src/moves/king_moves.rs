//! One-step king targets. Castling is generated separately because it
//! depends on rights and attacked squares.

use crate::game_state::chess_types::Square;
use crate::moves::step_tables::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KING_TARGETS: [u64; 64] = step_targets(&KING_OFFSETS);

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square.index()]
}
