//! Square coordinates in file-letter + rank-digit form (`e4`).
//!
//! Shared by the FEN parser/generator and the move text used on the
//! protocol loop.

use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert coordinate text (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Square::try_new(rank - b'0', file - b'a' + 1)
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!(a1.index(), 0);
        assert_eq!(h8.index(), 63);
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(h8), "h8");
    }

    #[test]
    fn from_str_matches_rank_and_file() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!((e4.rank(), e4.file()), (4, 5));
        assert_eq!(e4.bit(), 1u64 << 28);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }
}
