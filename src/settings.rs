//! Engine configuration
//!
//! Fixed at construction time. Hosts may pass partial JSON; missing fields
//! fall back to the defaults in `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration problems reported by [`SnakeConfig::validate`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {0} is outside 1..={max}", max = MAX_GRID_SIZE)]
    GridSize(i32),

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("speed-up period must be at least one food")]
    ZeroSpeedUpPeriod,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Optional tick acceleration as the snake eats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedUp {
    /// Foods eaten per acceleration step
    pub every: u32,
    /// Milliseconds removed from the interval per step
    pub step_ms: u32,
    /// Interval never drops below this
    pub min_interval_ms: u32,
}

impl Default for SpeedUp {
    fn default() -> Self {
        Self {
            every: SPEED_UP_EVERY,
            step_ms: SPEED_UP_STEP_MS,
            min_interval_ms: SPEED_UP_MIN_INTERVAL_MS,
        }
    }
}

impl SpeedUp {
    /// Interval after `foods_eaten` foods, starting from `base_ms`
    pub fn interval_ms(&self, base_ms: u32, foods_eaten: u32) -> u32 {
        let steps = foods_eaten / self.every.max(1);
        let reduced = base_ms.saturating_sub(steps.saturating_mul(self.step_ms));
        reduced.max(self.min_interval_ms.min(base_ms))
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Grid edge length in cells (the grid is square)
    pub grid_size: i32,
    /// Base milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Wall mode at construction and after every reset
    pub initial_wall_mode: bool,
    /// Points awarded per food
    pub score_per_food: u32,
    /// Tick acceleration, disabled when `None`
    pub speed_up: Option<SpeedUp>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_wall_mode: true,
            score_per_food: SCORE_PER_FOOD,
            speed_up: None,
        }
    }
}

impl SnakeConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if matches!(self.speed_up, Some(SpeedUp { every: 0, .. })) {
            return Err(ConfigError::ZeroSpeedUpPeriod);
        }
        Ok(())
    }

    /// Tick interval after `foods_eaten` foods (speed-up applied if enabled)
    pub fn interval_for(&self, foods_eaten: u32) -> u32 {
        match &self.speed_up {
            Some(speed_up) => speed_up.interval_ms(self.tick_interval_ms, foods_eaten),
            None => self.tick_interval_ms,
        }
    }

    /// Number of cells on the grid
    pub fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }
}
