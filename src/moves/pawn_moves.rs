use crate::game_state::chess_types::{Color, Square};
use crate::moves::step_tables::step_targets;

const WHITE_PAWN_CAPTURE_OFFSETS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const BLACK_PAWN_CAPTURE_OFFSETS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

pub const WHITE_PAWN_CAPTURES: [u64; 64] = step_targets(&WHITE_PAWN_CAPTURE_OFFSETS);
pub const BLACK_PAWN_CAPTURES: [u64; 64] = step_targets(&BLACK_PAWN_CAPTURE_OFFSETS);

/// Diagonal squares a pawn of `color` on `square` attacks.
#[inline]
pub const fn pawn_capture_targets(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square.index()],
        Color::Black => BLACK_PAWN_CAPTURES[square.index()],
    }
}
