use crate::game_state::chess_types::Square;
use crate::moves::step_tables::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KNIGHT_TARGETS: [u64; 64] = step_targets(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square.index()]
}
