//! Drawing controller
//!
//! Single owner of all drawing session state: the layout, the gesture
//! thresholds, the action history, and the stroke currently in progress.
//! Pointer events and history commands arrive as method calls and every
//! mutating method returns a fresh render snapshot, so collaborators only
//! ever see fully-formed state.

use crate::api::types::RenderState;
use crate::errors::GraphError;
use crate::gesture::{classify, GestureThresholds};
use crate::geometry::visible_segments;
use crate::history::ActionHistory;
use crate::layout::{GraphConfig, NumberLineLayout};
use crate::models::core::{Point, Stroke};
use crate::models::state::DrawnState;

/// Owns one number-line drawing session
#[derive(Clone, Debug)]
pub struct GraphController {
    layout: NumberLineLayout,
    thresholds: GestureThresholds,
    history: ActionHistory,
    current_stroke: Option<Stroke>,
}

impl GraphController {
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        Self::with_thresholds(config, GestureThresholds::default())
    }

    pub fn with_thresholds(
        config: GraphConfig,
        thresholds: GestureThresholds,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            layout: NumberLineLayout::new(config)?,
            thresholds,
            history: ActionHistory::new(),
            current_stroke: None,
        })
    }

    pub fn layout(&self) -> &NumberLineLayout {
        &self.layout
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Begin a stroke at a pointer-down sample
    ///
    /// A second contact while a stroke is active is ignored; the active
    /// stroke keeps collecting samples.
    pub fn on_stroke_start(&mut self, x: f64, y: f64) -> RenderState {
        if self.current_stroke.is_none() {
            let (x, y) = self.layout.clamp_to_surface(x, y);
            self.current_stroke = Some(Stroke::starting_at(Point::new(x, y)));
        }
        self.snapshot()
    }

    /// Append a pointer-move sample to the active stroke, if any
    pub fn on_stroke_move(&mut self, x: f64, y: f64) -> RenderState {
        if let Some(stroke) = self.current_stroke.as_mut() {
            let (x, y) = self.layout.clamp_to_surface(x, y);
            stroke.push(Point::new(x, y));
        }
        self.snapshot()
    }

    /// Finish the active stroke: classify it and record at most one action
    pub fn on_stroke_end(&mut self) -> RenderState {
        if let Some(stroke) = self.current_stroke.take() {
            if let Some(action) = classify(&stroke, &self.layout, &self.thresholds) {
                self.history.append(action);
            }
        }
        self.snapshot()
    }

    pub fn undo(&mut self) -> RenderState {
        self.history.undo();
        self.snapshot()
    }

    pub fn redo(&mut self) -> RenderState {
        self.history.redo();
        self.snapshot()
    }

    pub fn reset(&mut self) -> RenderState {
        self.history.reset();
        self.current_stroke = None;
        self.snapshot()
    }

    /// Reduce the applied history prefix and post-process geometry into a
    /// complete render snapshot
    pub fn snapshot(&self) -> RenderState {
        let state = DrawnState::from_actions(self.history.applied());
        RenderState {
            segments: visible_segments(&state, &self.layout),
            empty_ticks: state.empty_ticks.iter().copied().collect(),
            filled_ticks: state.filled_ticks.iter().copied().collect(),
            in_progress: self
                .current_stroke
                .as_ref()
                .map(|stroke| stroke.points().to_vec()),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            can_reset: self.history.can_reset(),
        }
    }
}
