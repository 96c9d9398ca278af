//! Ray casting for bishops, rooks and queens.
//!
//! A ray includes the first occupied square it meets and stops there; the
//! caller decides whether that square is a capture or a friendly blocker.

use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

#[inline]
pub fn ray_targets(square: Square, directions: &[(i8, i8)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(rank_step, file_step)| {
            acc | trace_ray(square, rank_step, file_step, occupancy)
        })
}

fn trace_ray(square: Square, rank_step: i8, file_step: i8, occupancy: u64) -> u64 {
    let mut targets = 0u64;
    let mut cursor = square.offset(rank_step, file_step);

    while let Some(to) = cursor {
        targets |= to.bit();
        if occupancy & to.bit() != 0 {
            break;
        }
        cursor = to.offset(rank_step, file_step);
    }

    targets
}
