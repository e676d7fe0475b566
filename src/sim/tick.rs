//! Fixed-step simulation tick
//!
//! Advances the snake by one cell and resolves wall, self and food
//! collisions. A fatal collision leaves the body exactly as it was.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use super::state::{GameState, GameStatus};
use crate::settings::SnakeConfig;
use crate::{in_bounds, wrap_cell};

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Head left the grid with wall mode on
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// Result of a single tick, for host-side cues (sound, flashes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// Not running; nothing changed
    Skipped,
    /// Snake translated by one cell
    Moved,
    /// Snake grew and new food was placed
    Ate { score: u32 },
    /// Snake grew and no free cell remains for food
    BoardFull { score: u32 },
    /// Run ended; state is otherwise untouched
    Died(DeathCause),
}

/// Advance the game state by one step
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, config: &SnakeConfig, rng: &mut R) -> TickEvent {
    if state.status != GameStatus::Running {
        return TickEvent::Skipped;
    }

    // Consume the queued turn
    let direction = state.pending_direction.take().unwrap_or(state.last_direction);
    state.last_direction = direction;

    let mut new_head = state.head() + direction.delta();
    if state.wall_mode {
        if !in_bounds(new_head, state.grid_size) {
            return game_over(state, DeathCause::Wall);
        }
    } else {
        new_head = wrap_cell(new_head, state.grid_size);
    }

    // Checked against the whole body, tail included
    if state.occupies(new_head) {
        return game_over(state, DeathCause::SelfCollision);
    }

    state.time_ticks += 1;
    state.snake.push_front(new_head);

    if state.food == Some(new_head) {
        state.score += config.score_per_food;
        state.foods_eaten += 1;
        state.food = place_food(state, rng);
        match state.food {
            Some(food) => {
                log::debug!("Food eaten (score {}), next food at {:?}", state.score, food);
                TickEvent::Ate { score: state.score }
            }
            None => {
                log::warn!("Board full at length {}", state.snake.len());
                TickEvent::BoardFull { score: state.score }
            }
        }
    } else {
        state.snake.pop_back();
        TickEvent::Moved
    }
}

fn game_over(state: &mut GameState, cause: DeathCause) -> TickEvent {
    state.status = GameStatus::GameOver;
    log::info!(
        "Game over ({:?}) after {} ticks, score {}",
        cause,
        state.time_ticks,
        state.score
    );
    TickEvent::Died(cause)
}
