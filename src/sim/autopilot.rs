//! Idle/demo steering
//!
//! Greedy one-step lookahead: of the moves that don't die next tick, take the
//! one closest to the food. Only ever suggests quarter turns, so its output
//! goes through the same `submit_direction` checks as player input.

use glam::IVec2;

use super::state::{Direction, GameState};
use crate::{grid_distance, in_bounds, wrap_cell};

/// Cell entered by stepping from `from`, or `None` if that step is fatal
fn step(state: &GameState, from: IVec2, direction: Direction) -> Option<IVec2> {
    let raw = from + direction.delta();
    let cell = if state.wall_mode {
        if !in_bounds(raw, state.grid_size) {
            return None;
        }
        raw
    } else {
        wrap_cell(raw, state.grid_size)
    };
    if state.occupies(cell) { None } else { Some(cell) }
}

/// Number of non-fatal moves out of `cell`
fn exits(state: &GameState, cell: IVec2) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|&d| step(state, cell, d).is_some())
        .count()
}

/// Turn to submit before the next tick, or `None` to keep heading
pub fn choose_turn(state: &GameState) -> Option<Direction> {
    let heading = state.last_direction;
    let candidates = std::iter::once(heading).chain(heading.turns());

    let best = candidates
        .filter_map(|d| step(state, state.head(), d).map(|cell| (d, cell)))
        .min_by_key(|&(d, cell)| {
            let distance = state
                .food
                .map(|food| grid_distance(cell, food, state.grid_size, !state.wall_mode))
                .unwrap_or(0);
            // Dead ends last, then nearest food, then prefer going straight
            let trapped = exits(state, cell) == 0 && state.food != Some(cell);
            (trapped, distance, d != heading)
        })
        .map(|(d, _)| d);

    match best {
        Some(d) if d != heading => Some(d),
        _ => None,
    }
}
