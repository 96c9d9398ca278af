//! Static evaluation from White's point of view.
//!
//! Search delegates non-terminal scoring to the `BoardScorer` trait so the
//! heuristic can be swapped without touching search code. Terminal positions
//! are scored by `terminal_score` and always dominate material.

use crate::game_state::game_status::{game_status, GameStatus};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::tables::piece_square_tables::piece_square_bonus;

/// White has delivered mate.
pub const WHITE_WINS_SCORE: i32 = i32::MAX;
/// Black has delivered mate. Kept at `-i32::MAX` so negation never overflows.
pub const BLACK_WINS_SCORE: i32 = -i32::MAX;

pub trait BoardScorer: Send + Sync {
    /// Score of a position that still has legal moves, positive when White is better.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mut score = 0i32;
        for color in [Color::White, Color::Black] {
            let sign = match color {
                Color::White => 1,
                Color::Black => -1,
            };
            for kind in ALL_PIECE_KINDS {
                let piece = Piece::new(kind, color);
                for square in squares_of(game_state.pieces_of(color, kind)) {
                    score += sign * (Self::piece_value(kind) + piece_square_bonus(piece, square));
                }
            }
        }
        score
    }
}

/// Score of a finished game, or `None` while moves remain.
pub fn terminal_score(game_state: &GameState, status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Tied => Some(0),
        GameStatus::Won => Some(match game_state.side_to_move {
            Color::Black => WHITE_WINS_SCORE,
            Color::White => BLACK_WINS_SCORE,
        }),
    }
}

/// Full evaluation: mate and stalemate first, then `PieceSquareScorer`.
pub fn evaluate(game_state: &GameState) -> i32 {
    terminal_score(game_state, game_status(game_state))
        .unwrap_or_else(|| PieceSquareScorer.score(game_state))
}
