//! Attack and check detection.
//!
//! Attacks are derived from the generator itself: the attacker's pseudo-legal
//! moves in attacking mode, generated on a copy with the attacker to move.
//! This keeps a single definition of how every piece moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_legal::{generate_pseudo_legal_moves, GenerationOptions};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    squares_of(game_state.pieces_of(color, PieceKind::King)).next()
}

/// Bitboard of every square `attacker` attacks in `game_state`.
pub fn attacked_squares(game_state: &GameState, attacker: Color) -> u64 {
    let mut attacker_view = *game_state;
    attacker_view.side_to_move = attacker;
    generate_pseudo_legal_moves(&attacker_view, GenerationOptions::ATTACKS)
        .iter()
        .fold(0u64, |acc, mv| acc | mv.end.bit())
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    attacked_squares(game_state, attacker) & square.bit() != 0
}

/// Whether the side to move has its king attacked. A board without that
/// king is never in check.
pub fn is_king_in_check(game_state: &GameState) -> bool {
    let side = game_state.side_to_move;
    king_square(game_state, side)
        .is_some_and(|king| is_square_attacked(game_state, king, side.opposite()))
}
