//! Generator abstraction used by search and perft.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_list::MoveList;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveList;

    /// Legal moves that capture. Used to narrow the last ply of a search.
    fn generate_legal_captures(&self, game_state: &GameState) -> MoveList;
}
