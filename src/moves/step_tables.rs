//! Compile-time target tables for pieces that move by fixed offsets.

use crate::game_state::chess_types::Square;

/// `(rank_delta, file_delta)` pairs.
pub type Offsets = [(i8, i8)];

/// For every square, the bitboard of on-board squares reachable by one offset.
pub const fn step_targets(offsets: &Offsets) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0u8;

    while index < 64 {
        let from = Square::from_index(index);
        let mut targets = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            let (rank_delta, file_delta) = offsets[i];
            if let Some(to) = from.offset(rank_delta, file_delta) {
                targets |= to.bit();
            }
            i += 1;
        }
        table[index as usize] = targets;
        index += 1;
    }

    table
}
