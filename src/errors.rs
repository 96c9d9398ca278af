//! Errors surfaced to callers that hand the engine external input.
//!
//! Everything here is recoverable: bad position text, bad coordinates, a move
//! string that does not match the position, or a malformed protocol command.
//! Caller bugs (out-of-range square construction, moving the wrong side's
//! piece) are not represented and panic instead.

use thiserror::Error;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The position text could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A coordinate such as `e9` or `z1`.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Move text that is not `<from><to>[promotion]`.
    #[error("invalid move text: {0}")]
    InvalidMove(String),

    /// Well-formed move text that is not legal in the current position.
    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
