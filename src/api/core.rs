//! WASM API for the number line grapher
//!
//! This module provides the JavaScript-facing API for graph lifecycle,
//! raw pointer events, and history commands. The controller is WASM-owned
//! (canonical source of truth); JavaScript only ever receives serialized
//! snapshots.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, graph_error, serialize};
use crate::api::types::{LayoutInfo, RenderState};
use crate::controller::GraphController;
use crate::errors::GraphError;
use crate::layout::GraphConfig;
use crate::{wasm_info, wasm_log};

// WASM-owned drawing controller (canonical source of truth)
lazy_static! {
    static ref GRAPH: Mutex<Option<GraphController>> = Mutex::new(None);
}

/// Run a closure against the initialized controller
fn with_graph<R>(f: impl FnOnce(&mut GraphController) -> R) -> Result<R, JsValue> {
    let mut guard = GRAPH.lock().unwrap();
    match guard.as_mut() {
        Some(controller) => Ok(f(controller)),
        None => Err(graph_error(GraphError::NotInitialized)),
    }
}

fn snapshot_to_js(state: &RenderState) -> Result<JsValue, JsValue> {
    serialize(state, "RenderState serialization error")
}

/// Create a new graph from a configuration object
///
/// # Parameters
/// - `config_js`: JavaScript object `{ min, max, width, height }`
///
/// # Returns
/// The static layout constants for the renderer
#[wasm_bindgen(js_name = createGraph)]
pub fn create_graph(config_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("createGraph called");

    let config: GraphConfig = deserialize(config_js, "GraphConfig deserialization error")?;
    let controller = GraphController::new(config).map_err(graph_error)?;
    let info = LayoutInfo::from_layout(controller.layout());

    *GRAPH.lock().unwrap() = Some(controller);
    wasm_info!(
        "createGraph completed: domain [{}, {}]",
        config.min,
        config.max
    );
    serialize(&info, "LayoutInfo serialization error")
}

/// Begin a stroke at a pointer-down sample
#[wasm_bindgen(js_name = strokeStart)]
pub fn stroke_start(x: f64, y: f64) -> Result<JsValue, JsValue> {
    wasm_log!("strokeStart at ({:.1}, {:.1})", x, y);
    let state = with_graph(|g| g.on_stroke_start(x, y))?;
    snapshot_to_js(&state)
}

/// Append a pointer-move sample to the active stroke
///
/// Not logged per call; this fires at pointer sampling rate.
#[wasm_bindgen(js_name = strokeMove)]
pub fn stroke_move(x: f64, y: f64) -> Result<JsValue, JsValue> {
    let state = with_graph(|g| g.on_stroke_move(x, y))?;
    snapshot_to_js(&state)
}

/// Finish the active stroke, recording at most one action
#[wasm_bindgen(js_name = strokeEnd)]
pub fn stroke_end() -> Result<JsValue, JsValue> {
    let state = with_graph(|g| g.on_stroke_end())?;
    wasm_info!(
        "strokeEnd: {} segments, {} open, {} closed",
        state.segments.len(),
        state.empty_ticks.len(),
        state.filled_ticks.len()
    );
    snapshot_to_js(&state)
}

/// Step the history cursor back one action
#[wasm_bindgen(js_name = graphUndo)]
pub fn graph_undo() -> Result<JsValue, JsValue> {
    wasm_info!("graphUndo called");
    let state = with_graph(|g| g.undo())?;
    snapshot_to_js(&state)
}

/// Step the history cursor forward one action
#[wasm_bindgen(js_name = graphRedo)]
pub fn graph_redo() -> Result<JsValue, JsValue> {
    wasm_info!("graphRedo called");
    let state = with_graph(|g| g.redo())?;
    snapshot_to_js(&state)
}

/// Clear the drawing and its history
#[wasm_bindgen(js_name = graphReset)]
pub fn graph_reset() -> Result<JsValue, JsValue> {
    wasm_info!("graphReset called");
    let state = with_graph(|g| g.reset())?;
    snapshot_to_js(&state)
}

/// Get the current render snapshot without mutating anything
#[wasm_bindgen(js_name = renderState)]
pub fn render_state() -> Result<JsValue, JsValue> {
    let state = with_graph(|g| g.snapshot())?;
    snapshot_to_js(&state)
}

/// Get the static layout constants for the renderer
#[wasm_bindgen(js_name = layoutInfo)]
pub fn layout_info() -> Result<JsValue, JsValue> {
    let info = with_graph(|g| LayoutInfo::from_layout(g.layout()))?;
    serialize(&info, "LayoutInfo serialization error")
}

/// Check if undo is available
#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    let guard = GRAPH.lock().unwrap();
    Ok(guard.as_ref().map_or(false, |g| g.history().can_undo()))
}

/// Check if redo is available
#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    let guard = GRAPH.lock().unwrap();
    Ok(guard.as_ref().map_or(false, |g| g.history().can_redo()))
}
