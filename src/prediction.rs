//! Trajectory prediction for the impactor preview.
//!
//! Runs the gravity integrator forward on a private copy of a candidate
//! state. The live impactor is never touched; the result is recomputed
//! from scratch whenever the launch changes.

use bevy::math::DVec3;

use crate::physics;
use crate::types::{BodyState, PrimaryBody};

/// Predicted trajectory path for a not-yet-launched impactor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryPath {
    /// Positions after each integration step, in internal units.
    pub points: Vec<DVec3>,
    /// Whether the prediction stopped because the path reached the surface.
    pub ends_in_impact: bool,
}

impl TrajectoryPath {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last sampled point, if any.
    pub fn last(&self) -> Option<DVec3> {
        self.points.last().copied()
    }
}

/// Predict up to `max_steps` positions starting one step after `start`.
///
/// Stops early the first time a sampled point is on or inside the primary.
/// Identical inputs always produce an identical path.
pub fn predict_trajectory(
    start: BodyState,
    primary: &PrimaryBody,
    max_steps: usize,
    dt: f64,
) -> TrajectoryPath {
    let mut path = TrajectoryPath {
        points: Vec::with_capacity(max_steps.min(4096)),
        ends_in_impact: false,
    };

    // Starting inside the surface never moves; nothing to preview.
    if primary.contains(start.pos) {
        path.ends_in_impact = true;
        return path;
    }

    let mut state = start;
    for _ in 0..max_steps {
        state = physics::step(state, primary, dt);
        path.points.push(state.pos);

        if primary.contains(state.pos) {
            path.ends_in_impact = true;
            break;
        }
    }

    path
}
