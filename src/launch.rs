//! Launch parameters and impactor spawning.
//!
//! A launch is described in real units (kilometers, km per tick) and turned
//! into an internal-unit `Impactor` deterministically. Placement follows the
//! y-up polar convention of [`polar_to_cartesian`]; the launch direction is
//! the inward radial direction tilted by the two offset angles.

use bevy::math::DVec3;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::geometry::{normalize, polar_to_cartesian};
use crate::types::BodyState;

/// Generative description of an impactor.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchParameters {
    /// Altitude above the primary's surface (km).
    pub distance_km: f64,
    /// Azimuthal placement angle θ (radians).
    pub azimuth: f64,
    /// Polar placement angle φ, measured from +y (radians).
    pub polar: f64,
    /// Initial speed (km per tick).
    pub speed: f64,
    /// Launch-direction offset added to the azimuth (radians).
    pub offset_azimuth: f64,
    /// Launch-direction offset added to the polar angle (radians).
    pub offset_polar: f64,
    /// Impactor radius (km).
    pub radius_km: f64,
    /// Impactor density (kg/m³). Zero means unknown.
    pub density: f64,
}

impl LaunchParameters {
    /// Reject non-finite or out-of-range values.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("distance_km", self.distance_km),
            ("azimuth", self.azimuth),
            ("polar", self.polar),
            ("speed", self.speed),
            ("offset_azimuth", self.offset_azimuth),
            ("offset_polar", self.offset_polar),
            ("radius_km", self.radius_km),
            ("density", self.density),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SimulationError::InvalidLaunchParameters { field, value });
            }
        }

        let checks = [
            ("distance_km", self.distance_km, self.distance_km >= 0.0),
            ("speed", self.speed, self.speed >= 0.0),
            ("radius_km", self.radius_km, self.radius_km > 0.0),
            ("density", self.density, self.density >= 0.0),
        ];
        for (field, value, ok) in checks {
            if !ok {
                return Err(SimulationError::InvalidLaunchParameters { field, value });
            }
        }

        Ok(())
    }
}

/// The live simulated body.
#[derive(Clone, Debug, PartialEq)]
pub struct Impactor {
    /// Position and velocity in internal units.
    pub state: BodyState,
    /// Radius in internal units (never below the visible floor).
    pub radius: f64,
    /// Density used for crater scaling (kg/m³).
    pub density: f64,
    /// Physical radius in kilometers, before the visible floor.
    pub radius_km: f64,
    /// Parameters this impactor was spawned from.
    pub launch: LaunchParameters,
}

/// Derive a new impactor from launch parameters.
///
/// # Errors
/// `InvalidLaunchParameters` if any field is non-finite or out of range.
pub fn spawn_impactor(params: &LaunchParameters, config: &SimulationConfig) -> Result<Impactor> {
    params.validate()?;
    let scale = config.unit_scale();

    let distance = scale.to_internal(params.distance_km + config.primary_real_radius_km);
    let pos = polar_to_cartesian(distance, params.polar, params.azimuth);

    let outward = polar_to_cartesian(
        1.0,
        params.polar + params.offset_polar,
        params.azimuth + params.offset_azimuth,
    );
    let vel = if params.speed > 0.0 {
        normalize(-outward)? * scale.to_internal(params.speed)
    } else {
        DVec3::ZERO
    };

    let density = if params.density == 0.0 {
        config.default_impactor_density
    } else {
        params.density
    };

    Ok(Impactor {
        state: BodyState::new(pos, vel),
        radius: scale.to_internal(params.radius_km).max(config.min_visible_radius),
        density,
        radius_km: params.radius_km,
        launch: params.clone(),
    })
}
