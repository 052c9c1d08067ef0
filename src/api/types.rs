//! Shared types for the WASM API
//!
//! This module contains the result structures handed across the JS
//! boundary: the per-change render snapshot and the static layout
//! constants the renderer receives once.

use serde::{Deserialize, Serialize};

use crate::geometry::RenderSegment;
use crate::layout::{NumberLineLayout, TickMark};
use crate::models::core::Point;

/// Complete drawable snapshot produced after every state change
///
/// The renderer must treat this as read-only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Post-split segment spans with end-arrow flags, in append order
    pub segments: Vec<RenderSegment>,
    /// Ticks currently marked with an open circle
    pub empty_ticks: Vec<i32>,
    /// Ticks currently marked with a closed circle
    pub filled_ticks: Vec<i32>,
    /// Raw samples of the stroke being drawn, if any
    pub in_progress: Option<Vec<Point>>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_reset: bool,
}

/// Static layout constants for the renderer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutInfo {
    /// Labeled tick positions in ascending value order
    pub ticks: Vec<TickMark>,
    pub baseline_y: f64,
    pub left_edge_x: f64,
    pub right_edge_x: f64,
    pub circle_radius: f64,
    pub tick_spacing: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutInfo {
    pub fn from_layout(layout: &NumberLineLayout) -> Self {
        Self {
            ticks: layout.tick_marks(),
            baseline_y: layout.baseline_y(),
            left_edge_x: layout.left_edge_x(),
            right_edge_x: layout.right_edge_x(),
            circle_radius: layout.circle_radius(),
            tick_spacing: layout.tick_spacing(),
            width: layout.width(),
            height: layout.height(),
        }
    }
}
