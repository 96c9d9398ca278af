//! Engine abstraction used by the protocol loop.
//!
//! The loop hands raw `go` limits to the engine and prints whatever the
//! engine reports back, so engines never touch I/O.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

/// Limits from a `go` command, as received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
    pub movestogo: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the position has no legal move.
    pub best_move: Option<Move>,
    /// Protocol `info ...` lines, oldest first.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput>;
}
