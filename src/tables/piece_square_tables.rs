//! Positional bonus tables, one per piece kind.
//!
//! Laid out as seen from White's side of the board: the first row is rank 8
//! and the last row is rank 1. Black reads the vertically mirrored square.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,   0,   0,  10,  30,  20,
];

#[inline]
const fn table_for(kind: PieceKind) -> &'static [i32; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Unsigned positional bonus for `piece` standing on `square`.
#[inline]
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let row_major_index = match piece.color {
        Color::White => square.mirror().index(),
        Color::Black => square.index(),
    };
    table_for(piece.kind)[row_major_index]
}

#[cfg(test)]
mod tests {
    use super::piece_square_bonus;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn white_home_squares_read_the_last_row() {
        let white = |kind| Piece::new(kind, Color::White);
        assert_eq!(piece_square_bonus(white(PieceKind::Knight), Square::new(1, 2)), -40);
        assert_eq!(piece_square_bonus(white(PieceKind::Queen), Square::new(1, 4)), -5);
        assert_eq!(piece_square_bonus(white(PieceKind::King), Square::new(1, 7)), 30);
        assert_eq!(piece_square_bonus(white(PieceKind::Pawn), Square::new(7, 1)), 50);
    }

    #[test]
    fn black_reads_the_mirrored_square() {
        for kind in crate::game_state::chess_types::ALL_PIECE_KINDS {
            for index in 0..64u8 {
                let square = Square::from_index(index);
                assert_eq!(
                    piece_square_bonus(Piece::new(kind, Color::Black), square),
                    piece_square_bonus(Piece::new(kind, Color::White), square.mirror())
                );
            }
        }
    }
}
