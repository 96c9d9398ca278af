//! Move application: the one state transition of `GameState`.
//!
//! Handles captures, promotion, castling rook relocation, en-passant capture
//! and target bookkeeping, castling-right updates and both clocks. The move is
//! trusted to come from the generator; only the mover's color is checked.

use crate::game_state::chess_rules::{kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};

impl GameState {
    /// Plays `mv` in place.
    ///
    /// # Panics
    ///
    /// Panics when `mv.start` is empty or holds a piece of the side not to move.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(moving) = self.remove(mv.start) else {
            panic!("apply_move: no piece on {} for move {mv}", mv.start);
        };
        assert_eq!(
            moving.color, self.side_to_move,
            "apply_move: {mv} moves a {:?} piece with {:?} to move",
            moving.color, self.side_to_move
        );

        let captured = self.remove(mv.end);
        if let Some(victim) = captured {
            if victim.kind == PieceKind::Rook {
                self.clear_rights_for_rook_square(victim.color, mv.end);
            }
        }
        let resets_clock = moving.kind == PieceKind::Pawn || captured.is_some();
        let mut next_en_passant = None;

        match mv.flag {
            MoveFlag::BreaksCastlingRights => {
                match moving.kind {
                    PieceKind::King => self.clear_castling_rights(
                        kingside_right(moving.color) | queenside_right(moving.color),
                    ),
                    PieceKind::Rook => self.clear_rights_for_rook_square(moving.color, mv.start),
                    _ => {}
                }
                self.add(mv.end, moving);
            }
            MoveFlag::PromoteQueen
            | MoveFlag::PromoteRook
            | MoveFlag::PromoteBishop
            | MoveFlag::PromoteKnight => {
                let kind = mv.flag.promotion_piece().unwrap_or(PieceKind::Queen);
                self.add(mv.end, Piece::new(kind, moving.color));
            }
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside => {
                let (rook_home, rook_file_delta) = if mv.flag == MoveFlag::CastleKingside {
                    (kingside_rook_home(moving.color), -1)
                } else {
                    (queenside_rook_home(moving.color), 1)
                };
                self.add(mv.end, moving);
                if let (Some(rook), Some(rook_to)) =
                    (self.remove(rook_home), mv.end.offset(0, rook_file_delta))
                {
                    self.add(rook_to, rook);
                }
                self.clear_castling_rights(
                    kingside_right(moving.color) | queenside_right(moving.color),
                );
            }
            MoveFlag::PawnDoublePush => {
                self.add(mv.end, moving);
                next_en_passant = mv.start.offset(moving.color.pawn_direction(), 0);
            }
            MoveFlag::EnPassant => {
                self.add(mv.end, moving);
                if let Some(victim_square) = mv.end.offset(-moving.color.pawn_direction(), 0) {
                    self.remove(victim_square);
                }
            }
            MoveFlag::None => self.add(mv.end, moving),
        }

        self.en_passant_square = next_en_passant;
        self.flip_side();

        if moving.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
    }

    fn clear_rights_for_rook_square(&mut self, color: Color, square: Square) {
        if square == kingside_rook_home(color) {
            self.clear_castling_rights(kingside_right(color));
        } else if square == queenside_rook_home(color) {
            self.clear_castling_rights(queenside_right(color));
        }
    }
}

/// Copy of `game_state` with `mv` applied; the input is left untouched.
#[inline]
pub fn apply_move(game_state: &GameState, mv: Move) -> GameState {
    let mut next = *game_state;
    next.apply_move(mv);
    next
}
