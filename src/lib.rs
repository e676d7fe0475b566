//! Grid Snake - a deterministic snake simulation on a square grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, tick, food placement)
//! - `platform`: Tick clock, input adapter and the browser facade
//! - `settings`: Constructor-time configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, SnakeConfig, SpeedUp};
pub use sim::{Command, Direction, Engine, GameStatus, Snapshot, TickEvent};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Default grid edge length (cells)
    pub const GRID_SIZE: i32 = 20;
    /// Largest grid edge accepted by config validation
    pub const MAX_GRID_SIZE: i32 = 256;
    /// Default milliseconds between ticks
    pub const TICK_INTERVAL_MS: u32 = 150;
    /// Default points per food
    pub const SCORE_PER_FOOD: u32 = 10;

    /// Speed-up defaults (only used when speed-up is enabled)
    pub const SPEED_UP_EVERY: u32 = 5;
    pub const SPEED_UP_STEP_MS: u32 = 5;
    pub const SPEED_UP_MIN_INTERVAL_MS: u32 = 40;

    /// Longest host frame the clock will account for (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Random draws before falling back to scanning free cells
    pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;
}

/// Wrap a cell onto a grid of the given size (torus topology)
#[inline]
pub fn wrap_cell(cell: IVec2, grid_size: i32) -> IVec2 {
    IVec2::new(cell.x.rem_euclid(grid_size), cell.y.rem_euclid(grid_size))
}

/// Whether a cell lies on a grid of the given size
#[inline]
pub fn in_bounds(cell: IVec2, grid_size: i32) -> bool {
    (0..grid_size).contains(&cell.x) && (0..grid_size).contains(&cell.y)
}

/// Shortest distance between two cells, optionally across the wrapped edges
pub fn grid_distance(a: IVec2, b: IVec2, grid_size: i32, wrap: bool) -> i32 {
    let d = (a - b).abs();
    if wrap {
        d.x.min(grid_size - d.x) + d.y.min(grid_size - d.y)
    } else {
        d.x + d.y
    }
}
