//! Bitboard position representation.
//!
//! `GameState` stores one bitboard per piece kind and color plus the scalar
//! rule state (side to move, castling rights, en-passant target and clocks).
//! The whole struct is `Copy`: search branches take a full value copy before
//! applying a move, so no branch can observe another branch's mutations.
//! Move application lives in `move_generation::legal_move_apply`.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, kept in sync by `add`/`remove`.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in (1..=8u8).zip(back_rank) {
            game_state.add(Square::new(1, file), Piece::new(kind, Color::White));
            game_state.add(Square::new(2, file), Piece::new(PieceKind::Pawn, Color::White));
            game_state.add(Square::new(7, file), Piece::new(PieceKind::Pawn, Color::Black));
            game_state.add(Square::new(8, file), Piece::new(kind, Color::Black));
        }
        game_state.castling_rights = CASTLE_WHITE_KINGSIDE
            | CASTLE_WHITE_QUEENSIDE
            | CASTLE_BLACK_KINGSIDE
            | CASTLE_BLACK_QUEENSIDE;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`, found by scanning the twelve bitboards.
    pub fn get(&self, square: Square) -> Option<Piece> {
        let mask = square.bit();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(kind, color));
                }
            }
        }
        None
    }

    /// Places `piece` on `square`, replacing whatever stood there.
    pub fn add(&mut self, square: Square, piece: Piece) {
        if self.occupancy_all & square.bit() != 0 {
            self.remove(square);
        }
        let mask = square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    /// Clears `square` and returns the piece that was on it.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square)?;
        let mask = !square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] &= mask;
        self.occupancy_by_color[piece.color.index()] &= mask;
        self.occupancy_all &= mask;
        Some(piece)
    }

    #[inline]
    pub fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn clear_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights &= !rights;
    }

    /// Same position with colors swapped and the board reflected rank-wise.
    ///
    /// Castling rights and the en-passant target follow the reflection.
    pub fn color_mirrored(&self) -> Self {
        let mut mirrored = Self::new_empty();
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                for square in squares_of(self.pieces_of(color, kind)) {
                    mirrored.add(square.mirror(), Piece::new(kind, color.opposite()));
                }
            }
        }
        mirrored.side_to_move = self.side_to_move.opposite();
        mirrored.castling_rights = ((self.castling_rights & 0b0011) << 2)
            | ((self.castling_rights & 0b1100) >> 2);
        mirrored.en_passant_square = self.en_passant_square.map(Square::mirror);
        mirrored.halfmove_clock = self.halfmove_clock;
        mirrored.fullmove_number = self.fullmove_number;
        mirrored
    }
}
