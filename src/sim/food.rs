//! Food placement
//!
//! Picks a uniformly random free cell. Random draws are cheap while the
//! board is sparse; a crowded board falls back to scanning the free cells so
//! placement always terminates.

use glam::IVec2;
use rand::Rng;

use super::state::GameState;
use crate::consts::FOOD_SAMPLE_ATTEMPTS;

/// Choose a free cell for food, or `None` if the snake fills the grid
pub fn place_food<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<IVec2> {
    if state.is_board_full() {
        return None;
    }

    let size = state.grid_size;
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let cell = IVec2::new(rng.random_range(0..size), rng.random_range(0..size));
        if !state.occupies(cell) {
            return Some(cell);
        }
    }

    let free: Vec<IVec2> = (0..size)
        .flat_map(|y| (0..size).map(move |x| IVec2::new(x, y)))
        .filter(|cell| !state.occupies(*cell))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}
