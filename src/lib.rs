//! Number Line Inequality Grapher WASM Module
//!
//! This is the main WASM module for the number line grapher. It turns raw
//! free-hand pointer strokes into semantic drawing actions (segments, open
//! and closed endpoint circles) with undo/redo history.

pub mod models;
pub mod layout;
pub mod gesture;
pub mod history;
pub mod geometry;
pub mod controller;
pub mod errors;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::state::DrawnState;
pub use layout::{GraphConfig, NumberLineLayout};
pub use controller::GraphController;
pub use errors::GraphError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Number line grapher WASM module initialized");
}
