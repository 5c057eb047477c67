//! Fixed-step semi-implicit Euler integrator.
//!
//! Velocity is updated before position. This keeps the scheme symplectic,
//! so bound orbits do not spiral outward the way explicit Euler does.

use crate::physics::gravity::gravity_acceleration;
use crate::types::{BodyState, PrimaryBody};

/// Advance `state` by one timestep under the primary's gravity.
///
/// At or inside the primary's surface the state is returned unchanged;
/// impact is flagged by the caller.
#[inline]
pub fn step(state: BodyState, primary: &PrimaryBody, dt: f64) -> BodyState {
    let Some(acc) = gravity_acceleration(state.pos, primary) else {
        return state;
    };

    let vel = state.vel + acc * dt;
    let pos = state.pos + vel * dt;
    BodyState { pos, vel }
}
