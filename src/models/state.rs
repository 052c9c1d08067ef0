//! Derived display state
//!
//! The visible drawing is never stored directly; it is recomputed by a
//! pure fold over the applied prefix of the action history whenever the
//! log or cursor changes. Recomputation from scratch is cheap relative to
//! stroke input rates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::core::{Action, Point};

/// Current drawable state, reduced from a history prefix
///
/// `segments` preserves append order so later segments render on top.
/// A tick is never in both circle sets at once: the two kinds are
/// mutually exclusive per tick, last writer wins.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DrawnState {
    pub segments: Vec<(Point, Point)>,
    pub empty_ticks: BTreeSet<i32>,
    pub filled_ticks: BTreeSet<i32>,
}

impl DrawnState {
    /// Fold a sequence of actions, in order, into display state
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for action in actions {
            state.apply(action);
        }
        state
    }

    fn apply(&mut self, action: &Action) {
        match *action {
            Action::Segment { from, to } => {
                self.segments.push((from, to));
            }
            Action::EmptyCircle { tick } => {
                self.filled_ticks.remove(&tick);
                self.empty_ticks.insert(tick);
            }
            Action::FilledCircle { tick } => {
                self.empty_ticks.remove(&tick);
                self.filled_ticks.insert(tick);
            }
        }
    }
}
