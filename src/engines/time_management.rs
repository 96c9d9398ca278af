//! Turns clock data from `go` into a per-move time budget.
//!
//! The protocol loop passes `wtime/btime/winc/binc/movestogo` through
//! untouched; the engine picks a strategy and resolves them here into a
//! single `movetime_ms`.

use crate::engines::engine_trait::GoParams;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeManagementStrategy {
    /// Spend a twentieth of the remaining clock.
    Fraction20,
    /// Spread the clock over the expected moves left, plus most of the increment.
    #[default]
    Adaptive,
}

/// Copy of `params` with `movetime_ms` filled from the mover's clock.
///
/// An explicit `movetime` always wins. Without clock data for the side to
/// move the params come back unchanged.
pub fn resolve_go_params(
    game_state: &GameState,
    params: &GoParams,
    strategy: TimeManagementStrategy,
) -> GoParams {
    if params.movetime_ms.is_some() {
        return *params;
    }

    let (remaining, increment) = match game_state.side_to_move {
        Color::White => (params.wtime_ms, params.winc_ms),
        Color::Black => (params.btime_ms, params.binc_ms),
    };

    let mut resolved = *params;
    if let Some(remaining) = remaining {
        resolved.movetime_ms = Some(match strategy {
            TimeManagementStrategy::Fraction20 => (remaining / 20).max(1),
            TimeManagementStrategy::Adaptive => {
                adaptive_budget_ms(game_state, remaining, increment, params.movestogo)
            }
        });
    }
    resolved
}

fn adaptive_budget_ms(
    game_state: &GameState,
    remaining_ms: u64,
    increment_ms: Option<u64>,
    movestogo: Option<u16>,
) -> u64 {
    let fullmove = u64::from(game_state.fullmove_number);
    let expected_moves_left = match movestogo {
        Some(moves) => u64::from(moves.max(1)),
        None if fullmove < 10 => 40,
        None if fullmove < 30 => 28,
        None => 18,
    };

    // Keep a slice of the clock back for move overhead.
    let reserve = (remaining_ms / 25).min(remaining_ms.saturating_sub(1)).max(1);
    let usable = remaining_ms.saturating_sub(reserve);
    let base = usable / expected_moves_left;
    let increment_bonus = increment_ms.unwrap_or(0).saturating_mul(3) / 4;

    let max_budget = (remaining_ms / 4).max(1);
    base.saturating_add(increment_bonus).clamp(1, max_budget)
}
