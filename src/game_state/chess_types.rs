//! Value types shared by every engine subsystem: colors, pieces, squares,
//! moves and the castling-rights bitmask.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Bishop => 1,
            PieceKind::Knight => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Three-bit type code used by the compact piece encoding.
    #[inline]
    pub const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(PieceKind::Pawn),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

const BLACK_CODE_BIT: u8 = 8;

/// A piece on the board. An empty square is `Option::<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Packs the piece into four bits: type in the low three, black as bit 3.
    #[inline]
    pub const fn code(self) -> u8 {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => self.kind.code() | BLACK_CODE_BIT,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        let color = if code & BLACK_CODE_BIT != 0 {
            Color::Black
        } else {
            Color::White
        };
        match PieceKind::from_code(code & 0b111) {
            Some(kind) if code < 16 => Some(Self { kind, color }),
            _ => None,
        }
    }

    /// FEN letter, uppercase for White.
    #[inline]
    pub const fn fen_char(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    pub const fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_symbol(ch.to_ascii_lowercase()) {
            Some(kind) => Some(Self { kind, color }),
            None => None,
        }
    }
}

/// Board coordinate stored as its bit index, `(rank - 1) * 8 + (file - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Builds a square from a 1-based rank and file.
    ///
    /// Panics when either coordinate is outside `1..=8`; use
    /// [`Square::try_new`] for coordinates that come from outside the engine.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(
            rank >= 1 && rank <= 8 && file >= 1 && file <= 8,
            "square coordinates out of range"
        );
        Self((rank - 1) * 8 + (file - 1))
    }

    pub fn try_new(rank: u8, file: u8) -> ChessResult<Self> {
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Ok(Self::new(rank, file))
        } else {
            Err(ChessError::InvalidSquare(format!("rank {rank}, file {file}")))
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 64, "square index out of range");
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Square reflected across the horizontal midline (a1 <-> a8).
    #[inline]
    pub const fn mirror(self) -> Self {
        Self(self.0 ^ 56)
    }

    /// Square shifted by the given deltas, or `None` when it falls off the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank() as i8 + rank_delta;
        let file = self.file() as i8 + file_delta;
        if rank < 1 || rank > 8 || file < 1 || file > 8 {
            None
        } else {
            Some(Self::new(rank as u8, file as u8))
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file() - 1);
        let rank = char::from(b'0' + self.rank());
        write!(f, "{file}{rank}")
    }
}

/// Iterates the set squares of a bitboard from a1 towards h8.
#[derive(Debug, Clone, Copy)]
pub struct BitboardSquares(u64);

impl Iterator for BitboardSquares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square(index))
    }
}

#[inline]
pub const fn squares_of(bitboard: u64) -> BitboardSquares {
    BitboardSquares(bitboard)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    None,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    PromoteQueen,
    PromoteRook,
    PromoteBishop,
    PromoteKnight,
    PawnDoublePush,
    /// Rook or king move that may clear castling rights.
    BreaksCastlingRights,
}

impl MoveFlag {
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveFlag::PromoteQueen => Some(PieceKind::Queen),
            MoveFlag::PromoteRook => Some(PieceKind::Rook),
            MoveFlag::PromoteBishop => Some(PieceKind::Bishop),
            MoveFlag::PromoteKnight => Some(PieceKind::Knight),
            _ => None,
        }
    }

    pub const fn promote_to(kind: PieceKind) -> Option<Self> {
        match kind {
            PieceKind::Queen => Some(MoveFlag::PromoteQueen),
            PieceKind::Rook => Some(MoveFlag::PromoteRook),
            PieceKind::Bishop => Some(MoveFlag::PromoteBishop),
            PieceKind::Knight => Some(MoveFlag::PromoteKnight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

/// A move as produced by the generator. It holds no reference to its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub flag: MoveFlag,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square, flag: MoveFlag) -> Self {
        Self { start, end, flag }
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        self.flag.promotion_piece()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flag.promotion_piece().is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }

    /// Same move promoting to `kind` instead. Non-promotions are returned as-is.
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        if !self.is_promotion() {
            return self;
        }
        match MoveFlag::promote_to(kind) {
            Some(flag) => Self { flag, ..self },
            None => self,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}
