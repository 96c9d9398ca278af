//! Perft: exhaustive move-path enumeration to a fixed depth.
//!
//! Used to check move generation against published node counts. Leaf moves
//! are also classified (captures, en passant, castles, promotions, checks,
//! mates) so a mismatch can be narrowed to one rule.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::pseudo_legal::is_capture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for &mv in &generator.generate_legal_moves(game_state) {
        if depth == 1 {
            total.merge(classify_leaf(generator, game_state, mv));
        } else {
            let next = apply_move(game_state, mv);
            total.merge(perft(generator, &next, depth - 1));
        }
    }
    total
}

/// Node count below each root move, in generation order.
pub fn divide<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(game_state)
        .iter()
        .map(|&mv| {
            let next = apply_move(game_state, mv);
            (mv, perft(generator, &next, depth - 1).nodes)
        })
        .collect()
}

fn classify_leaf<G: MoveGenerator>(generator: &G, parent: &GameState, mv: Move) -> PerftCounts {
    let next = apply_move(parent, mv);
    let gives_check = is_king_in_check(&next);

    PerftCounts {
        nodes: 1,
        captures: u64::from(is_capture(parent, mv)),
        en_passant: u64::from(mv.flag == MoveFlag::EnPassant),
        castles: u64::from(mv.is_castle()),
        promotions: u64::from(mv.is_promotion()),
        checks: u64::from(gives_check),
        checkmates: u64::from(gives_check && generator.generate_legal_moves(&next).is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_list::MoveList;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn nodes(fen: &str, depth: u8) -> u64 {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        perft(&LegalMoveGenerator, &game, depth).nodes
    }

    #[test]
    fn start_position_node_counts() {
        let game = GameState::new_game();
        let expected = [1u64, 20, 400, 8_902, 197_281];
        for (depth, want) in expected.iter().enumerate() {
            let counts = perft(&LegalMoveGenerator, &game, depth as u8);
            assert_eq!(counts.nodes, *want, "start position depth {depth}");
        }
    }

    #[test]
    fn start_position_depth_three_leaf_breakdown() {
        let counts = perft(&LegalMoveGenerator, &GameState::new_game(), 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        assert_eq!(nodes(KIWIPETE_FEN, 1), 48);

        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let counts = perft(&LegalMoveGenerator, &game, 2);
        assert_eq!(counts.nodes, 2_039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.checks, 3);
    }

    #[test]
    fn rook_and_pawn_endgame_counts() {
        assert_eq!(nodes(ENDGAME_FEN, 1), 14);
        assert_eq!(nodes(ENDGAME_FEN, 2), 191);
        assert_eq!(nodes(ENDGAME_FEN, 3), 2_812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let split = divide(&LegalMoveGenerator, &game, 3);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, count)| count).sum::<u64>(), 8_902);
    }

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl MoveGenerator for CountingGenerator {
        fn generate_legal_moves(&self, game_state: &GameState) -> MoveList {
            self.calls.fetch_add(1, Ordering::Relaxed);
            LegalMoveGenerator.generate_legal_moves(game_state)
        }

        fn generate_legal_captures(&self, game_state: &GameState) -> MoveList {
            LegalMoveGenerator.generate_legal_captures(game_state)
        }
    }

    #[test]
    fn perft_expands_only_interior_nodes() {
        let generator = CountingGenerator {
            calls: AtomicUsize::new(0),
        };
        let counts = perft(&generator, &GameState::new_game(), 2);
        assert_eq!(counts.nodes, 400);
        // Root plus one expansion per depth-one child.
        assert_eq!(generator.calls.load(Ordering::Relaxed), 21);
    }
}
