//! Leaf predicate: states whose score is about to change materially.
//!
//! The search stops at these states regardless of remaining depth and lets
//! the evaluator score them, so "about to score" positions are not cut off
//! one ply too early or too late.

use engine_core::GameState;

/// Adversaries with a scared timer above this are capturable.
pub const VULNERABLE_TIMER_THRESHOLD: u32 = 1;

/// Whether the controlled agent shares a cell with a capturable adversary.
pub fn on_vulnerable_adversary<S: GameState>(state: &S) -> bool {
    let here = state.controlled_position();
    state
        .adversaries()
        .iter()
        .any(|ghost| ghost.position == here && ghost.scared_timer > VULNERABLE_TIMER_THRESHOLD)
}

pub fn on_power_item<S: GameState>(state: &S) -> bool {
    state.has_power_item(state.controlled_position())
}

pub fn on_consumable<S: GameState>(state: &S) -> bool {
    state.has_consumable(state.controlled_position())
}

/// True iff the search must hand `state` to the evaluator now.
///
/// The co-location checks only fire for games that leave an item or a
/// capturable adversary on the agent's cell after the move. Games that
/// consume items and respawn captured adversaries within the same
/// successor, like the grid chase game, only ever trigger on win or lose.
pub fn should_self_evaluate<S: GameState>(state: &S) -> bool {
    state.is_lose()
        || state.is_win()
        || on_vulnerable_adversary(state)
        || on_power_item(state)
        || on_consumable(state)
}
