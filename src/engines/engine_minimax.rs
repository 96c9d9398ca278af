//! Minimax engine: fixed-depth or time-budgeted alpha-beta search.
//!
//! From the initial position White may play a random opening move instead of
//! searching. Each completed search iteration is reported as an `info` line.

use rand::rng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::engines::time_management::{resolve_go_params, TimeManagementStrategy};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{PieceSquareScorer, BLACK_WINS_SCORE, WHITE_WINS_SCORE};
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};
use crate::tables::opening_moves::opening_move_for;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const DEFAULT_DEPTH: u8 = 3;
/// Depth cap when only a time budget limits the search.
pub const MAX_TIMED_DEPTH: u8 = 32;

#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    own_book: bool,
    time_strategy: TimeManagementStrategy,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            own_book: true,
            time_strategy: TimeManagementStrategy::default(),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn own_book(&self) -> bool {
        self.own_book
    }

    fn search_config(&self, game_state: &GameState, params: &GoParams) -> SearchConfig {
        let resolved = resolve_go_params(game_state, params, self.time_strategy);
        let max_depth = match (resolved.depth, resolved.movetime_ms) {
            (Some(depth), _) => depth.max(1),
            (None, Some(_)) => MAX_TIMED_DEPTH,
            (None, None) => self.depth,
        };
        SearchConfig {
            max_depth,
            movetime_ms: resolved.movetime_ms,
        }
    }
}

impl Engine for MinimaxEngine {
    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = |reason: &str| ChessError::InvalidOption {
            name: name.to_owned(),
            reason: reason.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| invalid(&format!("'{value}' is not a depth")))?;
            if depth == 0 {
                return Err(invalid("depth must be at least 1"));
            }
            self.depth = depth;
        } else if name.eq_ignore_ascii_case("OwnBook") {
            self.own_book = parse_check(value)
                .ok_or_else(|| invalid(&format!("'{value}' is not true or false")))?;
        } else if name.eq_ignore_ascii_case("TimeStrategy") {
            self.time_strategy = match value.trim().to_ascii_lowercase().as_str() {
                "adaptive" => TimeManagementStrategy::Adaptive,
                "fraction20" => TimeManagementStrategy::Fraction20,
                _ => return Err(invalid(&format!("unknown strategy '{value}'"))),
            };
        } else {
            return Err(invalid("unknown option"));
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        if self.own_book && params.depth.is_none() {
            if let Some(book_move) = opening_move_for(game_state, &mut rng()) {
                return Ok(EngineOutput {
                    best_move: Some(book_move),
                    info_lines: vec!["info string opening move".to_owned()],
                });
            }
        }

        let config = self.search_config(game_state, params);
        let mut info_lines = Vec::new();
        let result = minimax_search(
            game_state,
            &LegalMoveGenerator,
            &PieceSquareScorer,
            config,
            |iteration| info_lines.push(format_info_line(game_state.side_to_move, iteration)),
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines,
        })
    }
}

fn parse_check(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `info depth .. score .. nodes .. time .. pv ..` with the score from the mover's side.
fn format_info_line(side_to_move: Color, iteration: &SearchResult) -> String {
    let relative = match side_to_move {
        Color::White => iteration.score,
        Color::Black => -iteration.score,
    };
    // Mate distance is not tracked; report the search horizon as its bound.
    let mate_in = iteration.reached_depth.max(1).div_ceil(2);
    let score = if relative == WHITE_WINS_SCORE {
        format!("mate {mate_in}")
    } else if relative == BLACK_WINS_SCORE {
        format!("mate -{mate_in}")
    } else {
        format!("cp {relative}")
    };

    let mut line = format!(
        "info depth {} score {score} nodes {} time {}",
        iteration.reached_depth, iteration.nodes, iteration.elapsed_ms
    );
    if let Some(best_move) = iteration.best_move {
        line.push_str(" pv ");
        line.push_str(&move_to_long_algebraic(best_move));
    }
    line
}
