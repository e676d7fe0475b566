//! Browser facade
//!
//! The page owns the canvas, the `requestAnimationFrame` loop and the DOM
//! listeners. It forwards frame deltas and key names here and draws from the
//! JSON snapshot.

use glam::IVec2;
use wasm_bindgen::prelude::*;

use super::input::command_for_key;
use super::time::TickClock;
use crate::settings::SnakeConfig;
use crate::sim::{Command, Engine};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Grid Snake loaded");
}

/// Engine plus clock, exported to JavaScript
#[wasm_bindgen]
pub struct WebSnake {
    engine: Engine,
    clock: TickClock,
}

#[wasm_bindgen]
impl WebSnake {
    /// Build from an optional JSON config; errors surface as JS exceptions
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebSnake, JsError> {
        let config = match config_json {
            Some(json) => SnakeConfig::from_json(&json)?,
            None => SnakeConfig::default(),
        };
        let seed: u64 = rand::random();
        let engine = Engine::new(config, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            engine,
            clock: TickClock::new(),
        })
    }

    /// Advance by a frame delta; returns the number of ticks that ran
    pub fn update(&mut self, dt_ms: f64) -> u32 {
        self.clock.advance(&mut self.engine, dt_ms).len() as u32
    }

    /// Forward a `KeyboardEvent.key`; returns whether it was bound
    pub fn key(&mut self, key: &str) -> bool {
        match command_for_key(key) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    pub fn submit_direction(&mut self, dx: i32, dy: i32) {
        self.engine.submit_vector(IVec2::new(dx, dy));
    }

    pub fn start(&mut self) {
        self.apply(Command::Start);
    }

    pub fn pause(&mut self) {
        self.apply(Command::Pause);
    }

    pub fn resume(&mut self) {
        self.apply(Command::Resume);
    }

    pub fn reset(&mut self) {
        self.apply(Command::Reset);
    }

    pub fn toggle_wall_mode(&mut self) {
        self.apply(Command::ToggleWallMode);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.clock.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Current interval, for hosts that drive ticks with `setInterval`
    pub fn tick_interval_ms(&self) -> u32 {
        self.engine.tick_interval_ms()
    }

    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.engine.snapshot())?)
    }
}

impl WebSnake {
    fn apply(&mut self, command: Command) {
        self.engine.apply(command);
        // Status changes never inherit a half-elapsed tick
        if !matches!(command, Command::Turn(_) | Command::ToggleWallMode) {
            self.clock.cancel();
        }
    }
}
