//! Legal move generation.
//!
//! A pseudo-legal move is legal when, after playing it on a copy and handing
//! the move back to the original mover, that mover's king is not in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_legal::{generate_pseudo_legal_moves, GenerationOptions};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveList {
        generate_legal_moves(game_state)
    }

    fn generate_legal_captures(&self, game_state: &GameState) -> MoveList {
        generate_legal_captures(game_state)
    }
}

pub fn generate_legal_moves(game_state: &GameState) -> MoveList {
    let mut moves = generate_pseudo_legal_moves(game_state, GenerationOptions::ALL);
    filter_legal(game_state, &mut moves);
    moves
}

pub fn generate_legal_captures(game_state: &GameState) -> MoveList {
    let mut moves = generate_pseudo_legal_moves(game_state, GenerationOptions::CAPTURES);
    filter_legal(game_state, &mut moves);
    moves
}

/// Drops every move in `moves` that leaves the mover's king attacked.
pub fn filter_legal(game_state: &GameState, moves: &mut MoveList) {
    moves.retain(|mv| keeps_king_safe(game_state, *mv));
}

#[inline]
pub fn keeps_king_safe(game_state: &GameState, mv: Move) -> bool {
    let mut after = *game_state;
    after.apply_move(mv);
    after.flip_side();
    !is_king_in_check(&after)
}

/// Stops at the first legal move instead of building the whole list.
pub fn has_legal_moves(game_state: &GameState) -> bool {
    generate_pseudo_legal_moves(game_state, GenerationOptions::ALL)
        .iter()
        .any(|mv| keeps_king_safe(game_state, *mv))
}

/// Legal moves with every queen promotion followed by its rook, bishop and
/// knight alternatives.
pub fn legal_moves_with_underpromotions(game_state: &GameState) -> Vec<Move> {
    let legal = generate_legal_moves(game_state);
    let mut expanded = Vec::with_capacity(legal.len());
    for &mv in &legal {
        expanded.push(mv);
        if mv.is_promotion() {
            for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
                expanded.push(mv.with_promotion(kind));
            }
        }
    }
    expanded
}
