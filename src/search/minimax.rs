//! Minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes over an explicit `(alpha, beta)`
//! window. One ply above the horizon, interior nodes only look at captures;
//! a node there without captures keeps its static score. The root always
//! considers every legal move.
//!
//! With a `movetime_ms` budget the search deepens one ply at a time and checks
//! the deadline between sibling expansions. An interrupted iteration is
//! discarded unless it is the first one.

use std::time::{Duration, Instant};

use crate::game_state::game_state::GameState;
use crate::game_state::game_status::game_status;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{
    terminal_score, BoardScorer, PieceSquareScorer, BLACK_WINS_SCORE, WHITE_WINS_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            movetime_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` at depth 0 or when the root has no legal moves.
    pub best_move: Option<Move>,
    /// From White's point of view.
    pub score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Fixed-depth search with the default generator and evaluator.
pub fn search(game_state: &GameState, depth: u8) -> SearchResult {
    search_with_config(
        game_state,
        SearchConfig {
            max_depth: depth,
            movetime_ms: None,
        },
    )
}

pub fn search_with_config(game_state: &GameState, config: SearchConfig) -> SearchResult {
    minimax_search(
        game_state,
        &LegalMoveGenerator,
        &PieceSquareScorer,
        config,
        |_| {},
    )
}

/// Runs the search and reports every completed iteration to `on_iteration`.
pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    mut on_iteration: impl FnMut(&SearchResult),
) -> SearchResult {
    let started_at = Instant::now();
    let deadline = config
        .movetime_ms
        .map(|ms| started_at + Duration::from_millis(ms.max(1)));

    let mut context = SearchContext {
        generator,
        scorer,
        deadline,
        nodes: 0,
        timed_out: false,
    };

    let first_depth = if deadline.is_some() { 1 } else { config.max_depth.max(1) };
    let mut result = SearchResult::default();

    if config.max_depth == 0 {
        let (best_move, score) =
            context.alpha_beta(game_state, 0, BLACK_WINS_SCORE, WHITE_WINS_SCORE, true);
        result.best_move = best_move;
        result.score = score;
    }

    for depth in first_depth..=config.max_depth {
        let (best_move, score) =
            context.alpha_beta(game_state, depth, BLACK_WINS_SCORE, WHITE_WINS_SCORE, true);

        if context.timed_out && depth > first_depth {
            break;
        }

        result.best_move = best_move;
        result.score = score;
        result.reached_depth = depth;
        result.nodes = context.nodes;
        result.elapsed_ms = started_at.elapsed().as_millis() as u64;
        on_iteration(&result);

        if context.timed_out || best_move.is_none() {
            break;
        }
    }

    result.nodes = context.nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

struct SearchContext<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
}

impl<G: MoveGenerator, S: BoardScorer> SearchContext<'_, G, S> {
    fn alpha_beta(
        &mut self,
        game_state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        is_root: bool,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;

        if depth == 0 {
            return (None, self.static_or_terminal_score(game_state));
        }

        let moves = if depth == 1 && !is_root {
            if let Some(score) = terminal_score(game_state, game_status(game_state)) {
                return (None, score);
            }
            self.generator.generate_legal_captures(game_state)
        } else {
            let moves = self.generator.generate_legal_moves(game_state);
            if moves.is_empty() {
                return (None, self.static_or_terminal_score(game_state));
            }
            moves
        };

        let maximizing = game_state.side_to_move == Color::White;
        let mut best: Option<(Move, i32)> = None;

        for &mv in &moves {
            if best.is_some() && self.deadline_passed() {
                self.timed_out = true;
                break;
            }

            let child = apply_move(game_state, mv);
            let (_, score) = self.alpha_beta(&child, depth - 1, alpha, beta, false);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            // Quiet node one ply above the horizon.
            None => (None, self.scorer.score(game_state)),
        }
    }

    fn static_or_terminal_score(&self, game_state: &GameState) -> i32 {
        terminal_score(game_state, game_status(game_state))
            .unwrap_or_else(|| self.scorer.score(game_state))
    }

    #[inline]
    fn deadline_passed(&self) -> bool {
        self.timed_out || self.deadline.is_some_and(|limit| Instant::now() >= limit)
    }
}
