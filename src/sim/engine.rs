//! Command surface over the simulation
//!
//! The engine owns the config, the state and the seeded RNG. Hosts drive it
//! with commands and `tick()`, and read it back through [`Snapshot`]s.
//! Commands that make no sense in the current status are silently ignored.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use super::state::{Direction, GameState, GameStatus, Snapshot};
use super::tick::{TickEvent, tick};
use crate::settings::{ConfigError, SnakeConfig};

/// Host input, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Start when idle, otherwise flip between running and paused
    TogglePause,
    Reset,
    ToggleWallMode,
    Turn(Direction),
}

/// The snake game state machine
#[derive(Debug, Clone)]
pub struct Engine {
    config: SnakeConfig,
    state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl Engine {
    /// Validate `config` and build an engine in `NotStarted` with food placed
    pub fn new(config: SnakeConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Engine with the default configuration
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SnakeConfig::default(), seed)
    }

    fn build(config: SnakeConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::new(&config);
        state.food = place_food(&state, &mut rng);
        Self {
            config,
            state,
            rng,
            seed,
        }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Read-only access to the live state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Interval the scheduler should use right now
    pub fn tick_interval_ms(&self) -> u32 {
        self.config.interval_for(self.state.foods_eaten)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(self.tick_interval_ms())
    }

    /// Advance one step (no-op unless running)
    pub fn tick(&mut self) -> TickEvent {
        tick(&mut self.state, &self.config, &mut self.rng)
    }

    /// Begin a run from `NotStarted` or after a game over
    ///
    /// The first start keeps the layout and food already on screen.
    pub fn start(&mut self) {
        match self.state.status {
            GameStatus::NotStarted => {
                self.state.status = GameStatus::Running;
                log::info!("Run started");
            }
            GameStatus::GameOver => self.restart(),
            GameStatus::Running | GameStatus::Paused => {}
        }
    }

    /// Fresh run from any status
    pub fn reset(&mut self) {
        self.restart();
    }

    pub fn pause(&mut self) {
        if self.state.status == GameStatus::Running {
            self.state.status = GameStatus::Paused;
            log::info!("Paused");
        }
    }

    pub fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            self.state.status = GameStatus::Running;
            log::info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::NotStarted => self.start(),
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::GameOver => {}
        }
    }

    /// Flip wall mode; takes effect on the next tick
    pub fn toggle_wall_mode(&mut self) {
        self.state.wall_mode = !self.state.wall_mode;
        log::info!("Wall mode {}", if self.state.wall_mode { "on" } else { "off" });
    }

    /// Queue a quarter turn for the next tick
    ///
    /// Only accepted while running, and only perpendicular to the direction
    /// the last tick applied. A later call before the tick replaces it.
    pub fn submit_direction(&mut self, direction: Direction) {
        if self.state.status != GameStatus::Running {
            return;
        }
        if direction.is_perpendicular_to(self.state.last_direction) {
            self.state.pending_direction = Some(direction);
        }
    }

    /// Like [`submit_direction`](Self::submit_direction) for a raw vector;
    /// anything but a unit step along one axis is ignored
    pub fn submit_vector(&mut self, v: IVec2) {
        if let Some(direction) = Direction::from_vector(v) {
            self.submit_direction(direction);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::ToggleWallMode => self.toggle_wall_mode(),
            Command::Turn(direction) => self.submit_direction(direction),
        }
    }

    fn restart(&mut self) {
        let mut state = GameState::new(&self.config);
        state.food = place_food(&state, &mut self.rng);
        state.status = GameStatus::Running;
        self.state = state;
        log::info!(
            "Run started on {}x{} grid (walls {})",
            self.config.grid_size,
            self.config.grid_size,
            if self.state.wall_mode { "on" } else { "off" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::DeathCause;

    fn started(seed: u64) -> Engine {
        let mut engine = Engine::with_seed(seed);
        engine.start();
        engine
    }

    #[test]
    fn test_new_is_not_started() {
        let engine = Engine::with_seed(1);
        let snap = engine.snapshot();
        assert_eq!(snap.status, GameStatus::NotStarted);
        assert_eq!(snap.snake, vec![IVec2::new(10, 10)]);
        assert!(snap.food.is_some());
        assert_eq!(snap.grid_size, 20);
        assert_eq!(snap.tick_interval_ms, 150);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SnakeConfig {
            grid_size: -3,
            ..Default::default()
        };
        assert!(Engine::new(config, 1).is_err());
    }

    #[test]
    fn test_ticks_ignored_before_start() {
        let mut engine = Engine::with_seed(1);
        assert_eq!(engine.tick(), TickEvent::Skipped);
        assert_eq!(engine.state().head(), IVec2::new(10, 10));
    }

    #[test]
    fn test_start_runs() {
        let mut engine = started(1);
        assert_eq!(engine.status(), GameStatus::Running);
        engine.tick();
        assert_eq!(engine.state().head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_first_start_keeps_food() {
        let mut engine = Engine::with_seed(21);
        let before = engine.snapshot();
        engine.start();
        let after = engine.snapshot();
        assert_eq!(after.status, GameStatus::Running);
        assert_eq!(after.food, before.food);
        assert_eq!(after.snake, before.snake);

        // Toggle-pause as the first input behaves the same
        let mut engine = Engine::with_seed(21);
        engine.toggle_pause();
        assert_eq!(engine.snapshot().food, before.food);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut engine = started(1);
        engine.tick();
        engine.start();
        assert_eq!(engine.state().head(), IVec2::new(11, 10));
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut engine = started(1);
        engine.pause();
        engine.pause();
        assert_eq!(engine.status(), GameStatus::Paused);
        assert_eq!(engine.tick(), TickEvent::Skipped);

        engine.resume();
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn test_toggle_pause() {
        let mut engine = Engine::with_seed(1);
        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Running);
        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Paused);
        engine.toggle_pause();
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn test_turns_ignored_while_paused() {
        let mut engine = started(1);
        engine.pause();
        engine.submit_direction(Direction::Up);
        assert!(engine.state().pending_direction.is_none());
    }

    #[test]
    fn test_reversal_rejected() {
        let mut engine = started(1);
        engine.submit_direction(Direction::Left);
        assert!(engine.state().pending_direction.is_none());
        engine.tick();
        assert_eq!(engine.state().head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_parallel_rejected() {
        let mut engine = started(1);
        engine.submit_direction(Direction::Right);
        assert!(engine.state().pending_direction.is_none());
    }

    #[test]
    fn test_latest_turn_wins() {
        let mut engine = started(1);
        engine.submit_direction(Direction::Up);
        engine.submit_direction(Direction::Down);
        assert_eq!(engine.state().pending_direction, Some(Direction::Down));
        engine.tick();
        assert_eq!(engine.state().head(), IVec2::new(10, 11));
    }

    #[test]
    fn test_cannot_reverse_through_queued_turn() {
        let mut engine = started(1);
        // Up is queued but Right is still in effect, so Left stays a reversal
        engine.submit_direction(Direction::Up);
        engine.submit_direction(Direction::Left);
        assert_eq!(engine.state().pending_direction, Some(Direction::Up));
    }

    #[test]
    fn test_submit_vector() {
        let mut engine = started(1);
        engine.submit_vector(IVec2::new(1, 1));
        assert!(engine.state().pending_direction.is_none());
        engine.submit_vector(IVec2::new(0, -1));
        assert_eq!(engine.state().pending_direction, Some(Direction::Up));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut engine = started(1);
        // Head at x=10 heading right: 10 ticks reach the wall
        let mut event = TickEvent::Skipped;
        for _ in 0..10 {
            event = engine.tick();
        }
        assert_eq!(event, TickEvent::Died(DeathCause::Wall));
        assert_eq!(engine.status(), GameStatus::GameOver);

        let before = engine.snapshot();
        engine.pause();
        engine.resume();
        engine.toggle_pause();
        engine.submit_direction(Direction::Up);
        assert_eq!(engine.tick(), TickEvent::Skipped);
        assert_eq!(engine.snapshot(), before);

        engine.start();
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn test_wall_mode_off_survives() {
        let mut engine = started(1);
        engine.toggle_wall_mode();
        for _ in 0..30 {
            assert_ne!(engine.tick(), TickEvent::Died(DeathCause::Wall));
        }
        assert_eq!(engine.status(), GameStatus::Running);
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut engine = started(5);
        engine.submit_direction(Direction::Up);
        engine.tick();
        engine.tick();
        engine.reset();

        let snap = engine.snapshot();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.snake, vec![IVec2::new(10, 10)]);
        assert_eq!(snap.score, 0);
        let food = snap.food.unwrap();
        assert_ne!(food, IVec2::new(10, 10));
        assert!(crate::in_bounds(food, 20));
        assert!(engine.state().pending_direction.is_none());
        assert_eq!(engine.state().last_direction, Direction::Right);
    }

    #[test]
    fn test_reset_restores_configured_wall_mode() {
        let mut engine = started(5);
        engine.toggle_wall_mode();
        engine.reset();
        assert!(engine.snapshot().wall_mode);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = Engine::with_seed(3);
        engine.apply(Command::Start);
        assert_eq!(engine.status(), GameStatus::Running);
        engine.apply(Command::Turn(Direction::Down));
        assert_eq!(engine.state().pending_direction, Some(Direction::Down));
        engine.apply(Command::ToggleWallMode);
        assert!(!engine.snapshot().wall_mode);
        engine.apply(Command::Pause);
        assert_eq!(engine.status(), GameStatus::Paused);
        engine.apply(Command::Resume);
        assert_eq!(engine.status(), GameStatus::Running);
        engine.apply(Command::Reset);
        assert!(engine.state().pending_direction.is_none());
    }

    #[test]
    fn test_speed_up_interval() {
        let config = SnakeConfig {
            speed_up: Some(crate::settings::SpeedUp::default()),
            ..Default::default()
        };
        let mut engine = Engine::new(config, 1).unwrap();
        engine.start();
        assert_eq!(engine.tick_interval_ms(), 150);
        engine.state.foods_eaten = 10;
        assert_eq!(engine.tick_interval_ms(), 140);
        assert_eq!(engine.snapshot().tick_interval_ms, 140);
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = Engine::with_seed(77);
        let b = Engine::with_seed(77);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
