//! Gesture classification
//!
//! This module turns a finished raw stroke into at most one semantic
//! drawing action. Small-footprint, high-curvature gestures are ambiguous
//! between "tap" and "circle drag", so vertical motion and ink density are
//! consulted before falling back to the general segment-snapping path,
//! which assumes primarily horizontal intent.

use serde::{Deserialize, Serialize};

use crate::layout::NumberLineLayout;
use crate::models::core::{Action, Point, Stroke};

/// Calibrated thresholds for stroke classification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// A stroke whose horizontal span is below this fraction of one tick
    /// width is a circle candidate rather than a segment
    pub circle_span_fraction: f64,
    /// Minimum sample count for a loop/scribble gesture
    pub min_circle_points: usize,
    /// Minimum vertical travel (px) separating an intentional mark from a
    /// flat dab on the line
    pub min_vertical_motion: f64,
    /// Ink-to-perimeter ratio at or above which a circle gesture counts as
    /// scribbled-in rather than outlined
    pub filled_ink_ratio: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            circle_span_fraction: 0.6,
            min_circle_points: 4,
            min_vertical_motion: 6.0,
            filled_ink_ratio: 1.2,
        }
    }
}

/// Classify a finished stroke into zero or one semantic action
///
/// Rules are evaluated in priority order; the first match wins:
/// 1. fewer than 2 samples: no action
/// 2. narrow horizontal span: circle gesture (empty or filled by ink
///    density) or, with almost no vertical travel, a tap producing a
///    filled circle
/// 3. otherwise: a horizontal segment snapped to extended-domain ticks,
///    dropped if both endpoints snap to the same tick
pub fn classify(
    stroke: &Stroke,
    layout: &NumberLineLayout,
    thresholds: &GestureThresholds,
) -> Option<Action> {
    if stroke.len() < 2 {
        return None;
    }
    let bounds = stroke.bounds()?;

    if bounds.span_x() < thresholds.circle_span_fraction * layout.tick_spacing() {
        let tick = layout.clamp_tick(layout.pixel_to_value(bounds.center_x()).round() as i32);

        if stroke.len() >= thresholds.min_circle_points
            && bounds.span_y() >= thresholds.min_vertical_motion
        {
            // Scribbling deposits more ink than tracing the outline would
            let ink_ratio = stroke.ink() / bounds.perimeter().max(1.0);
            if ink_ratio >= thresholds.filled_ink_ratio {
                return Some(Action::FilledCircle { tick });
            }
            return Some(Action::EmptyCircle { tick });
        }

        if bounds.span_y() < thresholds.min_vertical_motion {
            // A short flat dab is drawing on the line, not around a point
            return Some(Action::FilledCircle { tick });
        }
    }

    // Segment: snap the horizontal extremes to the extended domain so a
    // drag to (or past) an end lands on the arrow anchor
    let from_tick =
        layout.clamp_extended_tick(layout.pixel_to_value(bounds.min_x).round() as i32);
    let to_tick = layout.clamp_extended_tick(layout.pixel_to_value(bounds.max_x).round() as i32);
    if from_tick == to_tick {
        return None;
    }

    let y = layout.baseline_y();
    Some(Action::Segment {
        from: Point::new(layout.value_to_pixel(from_tick as f64), y),
        to: Point::new(layout.value_to_pixel(to_tick as f64), y),
    })
}
