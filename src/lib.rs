//! Hallway Escape core crate.
//!
//! Five hallways, one ghost each, a portal to the next room and a clock
//! running. The simulation (`game`), level data (`hallway`) and renderer
//! (`render`) are plain Rust and run natively; `web` wires them to a canvas,
//! the keyboard and `localStorage` when compiled for the browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod end_screen;
pub mod game;
pub mod geometry;
pub mod hallway;
pub mod input;
pub mod render;
pub mod timer;
mod web;

pub use config::GameConfig;
pub use game::{GameState, Phase, StepEvent, step};
pub use hallway::{HallwayId, hallway, hallways};
pub use input::{Intent, KeyState};
pub use timer::format_time;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (hot reload) only fails because a logger is already set.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Start with host overrides, e.g. `{"player_sprite": "cat.png"}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("invalid game config: {err}")))?;
    web::start(config)
}
