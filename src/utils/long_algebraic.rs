//! Move text in long algebraic form: `e2e4`, `e7e8q`.
//!
//! `move_to_text` writes only the two squares. Parsing goes the other way by
//! matching the text against the legal moves of the position, so the move
//! comes back with the same flag the generator would give it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves_with_underpromotions;
use crate::utils::algebraic::algebraic_to_square;

/// Start square followed by end square.
#[inline]
pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Move text with the promotion letter appended, as the protocol loop prints it.
pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut text = move_to_text(mv);
    if let Some(kind) = mv.promotion_piece() {
        text.push(kind.symbol());
    }
    text
}

pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMove(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(promotion_from_char(ch).ok_or_else(|| ChessError::InvalidMove(text.to_owned()))?),
    };

    legal_moves_with_underpromotions(game_state)
        .into_iter()
        .find(|mv| mv.start == start && mv.end == end && mv.promotion_piece() == promotion)
        .ok_or_else(|| ChessError::IllegalMove {
            mv: text.to_owned(),
            fen: game_state.get_fen(),
        })
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
