//! Fixed-capacity move buffer used on the hot generation path.
//!
//! Positions carry one king and at most 16 pieces per color (enforced when
//! parsing FEN). A queen reaches at most 27 squares and a king 8 plus two
//! castles, so pseudo-legal generation tops out at 15 * 27 + 10 = 415 moves.

use std::ops::Deref;

use crate::game_state::chess_types::{Move, MoveFlag, Square};

pub const MAX_MOVES: usize = 512;

const EMPTY_SLOT: Move = Move::new(Square::from_index(0), Square::from_index(0), MoveFlag::None);

#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            moves: [EMPTY_SLOT; MAX_MOVES],
            len: 0,
        }
    }

    /// Panics past `MAX_MOVES`: only a board built outside the piece limits gets there.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow at {MAX_MOVES} moves");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Keeps only the moves for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0usize;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
