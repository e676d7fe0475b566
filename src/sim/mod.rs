//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering, timer or input-device dependencies

pub mod autopilot;
pub mod engine;
pub mod food;
pub mod state;
pub mod tick;

pub use autopilot::choose_turn;
pub use engine::{Command, Engine};
pub use food::place_food;
pub use state::{Direction, GameState, GameStatus, Snapshot};
pub use tick::{DeathCause, TickEvent, tick};
