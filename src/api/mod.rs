//! Number Line Grapher WASM API
//!
//! This module provides the JavaScript-facing API for the number line
//! grapher. It includes shared utilities for serialization, validation,
//! and error handling, as well as the core API functions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result structures crossing the JS boundary
//! - `core`: Core API functions (graph lifecycle, pointer events, history)

pub mod helpers;
pub mod types;
pub mod core;

// Re-export all public functions to keep a flat public API
pub use self::core::{
    can_redo, can_undo, create_graph, graph_redo, graph_reset, graph_undo, layout_info,
    render_state, stroke_end, stroke_move, stroke_start,
};
pub use types::{LayoutInfo, RenderState};
