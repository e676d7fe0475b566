//! Grid Snake entry point
//!
//! Native builds run a headless autopilot demo; the browser build is driven
//! through `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_snake::platform::TickClock;
    use grid_snake::sim::{Engine, TickEvent};
    use grid_snake::{GameStatus, SnakeConfig};

    env_logger::init();
    log::info!("Grid Snake (native) starting...");

    // Demo runs with pass-through walls so the autopilot lives longer
    let config = SnakeConfig {
        initial_wall_mode: false,
        ..Default::default()
    };
    let seed: u64 = rand::random();
    let mut engine = match Engine::new(config, seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return;
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut clock = TickClock::new();
    clock.autopilot = true;
    engine.start();

    // Simulated 60 Hz frames, capped so a lucky run still ends
    let frame_ms = 1000.0 / 60.0;
    let max_frames = 60 * 60 * 5;
    let mut frames = 0;
    while engine.status() == GameStatus::Running && frames < max_frames {
        for event in clock.advance(&mut engine, frame_ms) {
            if let TickEvent::Ate { score } = event {
                log::info!("Score: {}", score);
            }
        }
        frames += 1;
    }

    let snapshot = engine.snapshot();
    print!("{}", snapshot.to_ascii());
    println!(
        "\n{} after {} ticks ({} ms each): score {}, length {}",
        snapshot.status.as_str(),
        engine.state().time_ticks,
        snapshot.tick_interval_ms,
        snapshot.score,
        snapshot.snake.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
