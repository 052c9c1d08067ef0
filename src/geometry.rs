//! Segment geometry post-processing
//!
//! Two render-time refinements over the reduced state, both pure: filled
//! segments are split so they do not run through the interior of an open
//! circle, and segments reaching an end of the drawable interval are
//! flagged for an arrowhead there.

use serde::{Deserialize, Serialize};

use crate::layout::NumberLineLayout;
use crate::models::state::DrawnState;

/// Visible sub-spans narrower than this are dropped after gap subtraction
const MIN_SPAN_EPS: f64 = 1e-3;

/// How close (px) a stored endpoint must be to the drawable extreme to
/// earn an arrow. Endpoints are snapped to tick pixels, so this only has
/// to absorb float rounding.
const ARROW_EDGE_TOLERANCE: f64 = 1.5;

/// One drawable horizontal span handed to the renderer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderSegment {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub arrow_left: bool,
    pub arrow_right: bool,
}

/// Post-process reduced state into drawable segment geometry
///
/// Output preserves segment append order; each stored segment contributes
/// zero or more disjoint sub-spans, with arrow flags riding on the first
/// and last surviving sub-span of the segment that earned them.
pub fn visible_segments(state: &DrawnState, layout: &NumberLineLayout) -> Vec<RenderSegment> {
    let mut out = Vec::new();
    for &(from, to) in &state.segments {
        let x_lo = from.x.min(to.x);
        let x_hi = from.x.max(to.x);
        let y = from.y;

        let arrow_left = (x_lo - layout.left_edge_x()).abs() <= ARROW_EDGE_TOLERANCE;
        let arrow_right = (x_hi - layout.right_edge_x()).abs() <= ARROW_EDGE_TOLERANCE;

        let gaps = circle_gaps(x_lo, x_hi, state, layout);
        let spans = subtract_gaps(x_lo, x_hi, &gaps);

        let last = spans.len().saturating_sub(1);
        for (i, &(x1, x2)) in spans.iter().enumerate() {
            out.push(RenderSegment {
                x1,
                x2,
                y,
                arrow_left: arrow_left && i == 0,
                arrow_right: arrow_right && i == last,
            });
        }
    }
    out
}

/// Pixel intervals blotted out of `[x_lo, x_hi]` by open-circle footprints,
/// sorted by start and coalesced
fn circle_gaps(x_lo: f64, x_hi: f64, state: &DrawnState, layout: &NumberLineLayout) -> Vec<(f64, f64)> {
    let radius = layout.circle_radius();
    let mut gaps: Vec<(f64, f64)> = state
        .empty_ticks
        .iter()
        .map(|&tick| {
            let center = layout.value_to_pixel(tick as f64);
            (center - radius, center + radius)
        })
        .filter(|&(start, end)| end > x_lo && start < x_hi)
        .collect();
    gaps.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut merged: Vec<(f64, f64)> = Vec::new();
    for gap in gaps {
        match merged.last_mut() {
            Some(last) if gap.0 <= last.1 => last.1 = last.1.max(gap.1),
            _ => merged.push(gap),
        }
    }
    merged
}

/// Subtract sorted, disjoint gaps from `[x_lo, x_hi]`
fn subtract_gaps(x_lo: f64, x_hi: f64, gaps: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut spans = Vec::new();
    let mut cursor = x_lo;
    for &(start, end) in gaps {
        if start - cursor > MIN_SPAN_EPS {
            spans.push((cursor, start.min(x_hi)));
        }
        cursor = cursor.max(end);
        if cursor >= x_hi {
            break;
        }
    }
    if x_hi - cursor > MIN_SPAN_EPS {
        spans.push((cursor, x_hi));
    }
    spans
}
