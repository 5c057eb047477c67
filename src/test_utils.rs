//! Test utilities for the impact simulation.
//!
//! Provides fixtures for primaries, orbits and launch parameters shared by
//! the unit tests.

use bevy::math::DVec3;

use crate::config::SimulationConfig;
use crate::launch::LaunchParameters;
use crate::types::{BodyState, PrimaryBody};

/// Fixtures for creating test states.
pub mod fixtures {
    use super::*;

    /// The default Earth-like primary.
    pub fn primary() -> PrimaryBody {
        SimulationConfig::default().primary()
    }

    /// Body in a circular orbit of radius `r` in the xz-plane.
    pub fn circular_orbit(primary: &PrimaryBody, r: f64) -> BodyState {
        let v = (primary.gm / r).sqrt();
        BodyState::new(DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, 0.0, v))
    }

    /// Specific orbital energy E = v²/2 - GM/r.
    pub fn specific_energy(state: &BodyState, primary: &PrimaryBody) -> f64 {
        0.5 * state.vel.length_squared() - primary.gm / state.pos.length()
    }

    /// The default scenario: 10 000 km above the surface, at rest, no offsets.
    pub fn default_launch() -> LaunchParameters {
        LaunchParameters {
            distance_km: 10_000.0,
            azimuth: 2.0,
            polar: 2.0,
            speed: 0.0,
            offset_azimuth: 0.0,
            offset_polar: 0.0,
            radius_km: 2000.0,
            density: 0.0,
        }
    }

    /// A small, dense body launched straight down at 5 km/tick.
    pub fn fast_launch() -> LaunchParameters {
        LaunchParameters {
            distance_km: 3000.0,
            azimuth: 0.3,
            polar: 1.2,
            speed: 5.0,
            offset_azimuth: 0.0,
            offset_polar: 0.0,
            radius_km: 0.5,
            density: 3000.0,
        }
    }
}
