//! First moves for White, picked at random so games from the start position vary.

use rand::Rng;

use crate::game_state::chess_types::{Move, MoveFlag, Square};
use crate::game_state::game_state::GameState;

pub const WHITE_OPENING_MOVES: [Move; 4] = [
    Move::new(Square::new(2, 4), Square::new(4, 4), MoveFlag::PawnDoublePush),
    Move::new(Square::new(2, 5), Square::new(4, 5), MoveFlag::PawnDoublePush),
    Move::new(Square::new(2, 3), Square::new(4, 3), MoveFlag::PawnDoublePush),
    Move::new(Square::new(1, 7), Square::new(3, 6), MoveFlag::None),
];

#[inline]
pub fn choose_white_opening<R: Rng + ?Sized>(rng: &mut R) -> Move {
    WHITE_OPENING_MOVES[rng.random_range(0..WHITE_OPENING_MOVES.len())]
}

/// A random opening move when `game_state` is the initial position, else `None`.
pub fn opening_move_for<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<Move> {
    (*game_state == GameState::new_game()).then(|| choose_white_opening(rng))
}
