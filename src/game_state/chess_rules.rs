//! Canonical chess-rule constants.
//!
//! Start position, home squares used by castling, and the pawn ranks that
//! trigger double pushes and promotion.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const KING_FILE: u8 = 5;
const KINGSIDE_ROOK_FILE: u8 = 8;
const QUEENSIDE_ROOK_FILE: u8 = 1;

#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(home_rank(color), KING_FILE)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new(home_rank(color), KINGSIDE_ROOK_FILE)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new(home_rank(color), QUEENSIDE_ROOK_FILE)
}
