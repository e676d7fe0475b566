//! Platform layer
//!
//! Everything the engine deliberately knows nothing about:
//! - Time: turning host frame deltas into ticks
//! - Input: mapping key names to commands
//! - Web: the `wasm-bindgen` facade driven by the browser page

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::command_for_key;
pub use time::TickClock;
