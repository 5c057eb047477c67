//! Gravitational acceleration toward the primary.

use bevy::math::DVec3;

use crate::types::PrimaryBody;

/// Acceleration at `pos` due to the primary, in internal units per tick².
///
/// Returns `None` at or inside the surface, where no gravity step is taken.
#[inline]
pub fn gravity_acceleration(pos: DVec3, primary: &PrimaryBody) -> Option<DVec3> {
    let delta = PrimaryBody::CENTER - pos;
    let r_squared = delta.length_squared();
    let r = r_squared.sqrt();

    if r <= primary.radius {
        return None;
    }

    // a = GM/r² along delta/r
    Some(delta * (primary.gm / (r_squared * r)))
}
