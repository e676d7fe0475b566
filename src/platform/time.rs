//! Tick scheduling
//!
//! Hosts call [`TickClock::advance`] once per frame with the elapsed time.
//! The clock owns the accumulator; the engine never sees wall-clock time.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::sim::{Engine, GameStatus, TickEvent, choose_turn};

/// Fixed-interval driver for an [`Engine`]
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator_ms: f64,
    /// Steer with the autopilot before each tick
    pub autopilot: bool,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds banked toward the next tick
    pub fn pending_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Drop any partially elapsed tick
    pub fn cancel(&mut self) {
        self.accumulator_ms = 0.0;
    }

    /// Run however many ticks `dt_ms` of host time covers
    ///
    /// Returns the events of the ticks that ran. Time does not accumulate
    /// while the engine is not running, so a pause or reset cancels any tick
    /// that was already due.
    pub fn advance(&mut self, engine: &mut Engine, dt_ms: f64) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if engine.status() != GameStatus::Running {
            self.cancel();
            return events;
        }

        // A host's first frame can report NaN
        let dt_ms = if dt_ms.is_finite() { dt_ms } else { 0.0 };
        self.accumulator_ms += dt_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        // Re-read every step; speed-up can shorten it mid-frame
        let mut interval = f64::from(engine.tick_interval_ms());
        while self.accumulator_ms >= interval && substeps < MAX_SUBSTEPS {
            if self.autopilot {
                if let Some(turn) = choose_turn(engine.state()) {
                    engine.submit_direction(turn);
                }
            }

            let event = engine.tick();
            self.accumulator_ms -= interval;
            substeps += 1;
            events.push(event);

            if engine.status() != GameStatus::Running {
                self.cancel();
                break;
            }
            interval = f64::from(engine.tick_interval_ms());
        }

        events
    }
}
