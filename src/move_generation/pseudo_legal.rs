//! Pseudo-legal move generation for the side to move.
//!
//! Walks the mover's occupied squares from a1 to h8 and dispatches on the
//! piece found there. Moves may still leave the mover's king in check; the
//! legality filter removes those.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Produce the squares each piece attacks: no castling, no pawn pushes,
    /// and pawn diagonals even when nothing stands there.
    pub only_attacking: bool,
    /// Drop every move that neither lands on an enemy piece nor captures en passant.
    pub only_captures: bool,
}

impl GenerationOptions {
    pub const ALL: Self = Self {
        only_attacking: false,
        only_captures: false,
    };
    pub const ATTACKS: Self = Self {
        only_attacking: true,
        only_captures: false,
    };
    pub const CAPTURES: Self = Self {
        only_attacking: false,
        only_captures: true,
    };
}

pub fn generate_pseudo_legal_moves(game_state: &GameState, options: GenerationOptions) -> MoveList {
    let mut moves = MoveList::new();
    generate_pseudo_legal_moves_into(game_state, options, &mut moves);
    moves
}

pub fn generate_pseudo_legal_moves_into(
    game_state: &GameState,
    options: GenerationOptions,
    out: &mut MoveList,
) {
    let side = game_state.side_to_move;

    for from in squares_of(game_state.occupancy(side)) {
        let Some(piece) = game_state.get(from) else {
            continue;
        };
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, options, out),
            PieceKind::Knight => generate_knight_moves(game_state, from, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
            PieceKind::Rook => generate_rook_moves(game_state, from, out),
            PieceKind::Queen => generate_queen_moves(game_state, from, out),
            PieceKind::King => generate_king_moves(game_state, from, options, out),
        }
    }

    if options.only_captures {
        out.retain(|mv| is_capture(game_state, *mv));
    }
}

/// Whether `mv`, played from `game_state`, removes an enemy piece.
#[inline]
pub fn is_capture(game_state: &GameState, mv: Move) -> bool {
    mv.flag == MoveFlag::EnPassant
        || game_state.occupancy(game_state.side_to_move.opposite()) & mv.end.bit() != 0
}
