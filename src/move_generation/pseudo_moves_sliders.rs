//! Bishop, rook and queen moves.
//!
//! Rook moves carry `BreaksCastlingRights`; move application decides whether
//! the rook actually left a home corner.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_move_shared::{not_friendly, push_targets};
use crate::moves::sliding_moves::{
    ray_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let rays = ray_targets(from, &BISHOP_DIRECTIONS, game_state.occupancy_all);
    push_targets(from, not_friendly(game_state, rays), MoveFlag::None, out);
}

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let rays = ray_targets(from, &ROOK_DIRECTIONS, game_state.occupancy_all);
    push_targets(
        from,
        not_friendly(game_state, rays),
        MoveFlag::BreaksCastlingRights,
        out,
    );
}

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let rays = ray_targets(from, &QUEEN_DIRECTIONS, game_state.occupancy_all);
    push_targets(from, not_friendly(game_state, rays), MoveFlag::None, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_ray_stops_on_capture_and_before_friend() {
        let game = GameState::from_fen("4k3/8/8/8/r7/8/P7/R3K3 w Q - 0 1")
            .expect("FEN should parse");
        let mut moves = MoveList::new();
        generate_rook_moves(&game, Square::new(1, 1), &mut moves);

        let texts: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        assert_eq!(texts, vec!["a1b1", "a1c1", "a1d1"]);
        assert!(moves
            .iter()
            .all(|mv| mv.flag == MoveFlag::BreaksCastlingRights));
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let mut game = GameState::new_empty();
        let d4 = Square::new(4, 4);
        game.add(d4, Piece::new(PieceKind::Queen, Color::White));
        let mut moves = MoveList::new();
        generate_queen_moves(&game, d4, &mut moves);
        assert_eq!(moves.len(), 27);

        moves.clear();
        generate_bishop_moves(&game, d4, &mut moves);
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn bishop_captures_enemy_blocker() {
        let game = GameState::from_fen("4k3/8/8/8/8/2n5/8/B3K3 w - - 0 1")
            .expect("FEN should parse");
        let mut moves = MoveList::new();
        generate_bishop_moves(&game, Square::new(1, 1), &mut moves);

        let texts: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        assert_eq!(texts, vec!["a1b2", "a1c3"]);
    }
}
