//! Play/checkmate/stalemate classification, computed fresh on every call.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// The side to move is checkmated; the other side won.
    Won,
    /// Stalemate.
    Tied,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    if has_legal_moves(game_state) {
        GameStatus::Playing
    } else if is_king_in_check(game_state) {
        GameStatus::Won
    } else {
        GameStatus::Tied
    }
}
