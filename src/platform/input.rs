//! Keyboard adapter
//!
//! Key names follow `KeyboardEvent.key` so the browser can forward them
//! untouched.

use crate::sim::{Command, Direction};

/// Command bound to a key, if any
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        " " | "Spacebar" => Command::TogglePause,
        "Enter" => Command::Start,
        "r" | "R" => Command::Reset,
        "m" | "M" => Command::ToggleWallMode,
        _ => return None,
    };
    Some(command)
}
