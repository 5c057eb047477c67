//! Tuning constants for the simulation.
//!
//! All knobs live in one Bevy resource so the host can override them
//! before inserting `SimulationPlugin`.

use bevy::prelude::*;

use crate::types::{
    EARTH_RADIUS_INTERNAL, EARTH_RADIUS_KM, GM_EARTH_KM3_S2, PrimaryBody, UnitScale,
};

/// Configuration for the impact simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationConfig {
    /// Primary radius in internal units. Default: 100.
    pub primary_radius: f64,
    /// Primary radius in kilometers. Default: 6371.
    pub primary_real_radius_km: f64,
    /// Gravitational parameter in internal units³/tick².
    /// Default: Earth's GM scaled into internal units, one tick = one second.
    pub gravitational_parameter: f64,
    /// Integration timestep per frame (ticks). Default: 1.0.
    pub time_step: f64,
    /// Maximum integration steps in a trajectory preview. Default: 5000.
    pub prediction_steps: usize,
    /// Timestep used by the trajectory preview. Default: 1.0.
    pub prediction_dt: f64,
    /// Smallest impactor radius in internal units. Default: 0.005.
    pub min_visible_radius: f64,
    /// Tug acceleration in internal units per tick². Default: 2e-4.
    pub tug_acceleration: f64,
    /// Density of the target surface (kg/m³). Default: 2700.
    pub target_density: f64,
    /// Density substituted when a launch gives density 0 (kg/m³). Default: 3000.
    pub default_impactor_density: f64,
    /// Radius multipliers for primary, secondary and tertiary zones.
    pub zone_multipliers: [f64; 3],
    /// Opacity for each zone, most severe first.
    pub zone_opacities: [f32; 3],
    /// Growth factor assigned on impact. Default: 1.0.
    pub zone_growth_initial: f64,
    /// Growth increment per tick. Default: 0.01.
    pub zone_growth_step: f64,
    /// Growth cap. Default: 2.0.
    pub zone_growth_cap: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let scale = UnitScale::new(EARTH_RADIUS_KM, EARTH_RADIUS_INTERNAL);
        Self {
            primary_radius: EARTH_RADIUS_INTERNAL,
            primary_real_radius_km: EARTH_RADIUS_KM,
            gravitational_parameter: GM_EARTH_KM3_S2 / scale.km_per_unit.powi(3),
            time_step: 1.0,
            prediction_steps: 5000,
            prediction_dt: 1.0,
            min_visible_radius: 0.005,
            tug_acceleration: 2e-4,
            target_density: 2700.0,
            default_impactor_density: 3000.0,
            zone_multipliers: [1.0, 2.0, 4.0],
            zone_opacities: [0.6, 0.4, 0.2],
            zone_growth_initial: 1.0,
            zone_growth_step: 0.01,
            zone_growth_cap: 2.0,
        }
    }
}

impl SimulationConfig {
    /// Real-to-internal unit conversion derived from the primary's radii.
    pub fn unit_scale(&self) -> UnitScale {
        UnitScale::new(self.primary_real_radius_km, self.primary_radius)
    }

    /// The primary body described by this configuration.
    pub fn primary(&self) -> PrimaryBody {
        PrimaryBody {
            radius: self.primary_radius,
            gm: self.gravitational_parameter,
        }
    }
}

/// Host-side pacing of the simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Ticks advanced per frame, as a multiple of `SimulationConfig::time_step`.
    pub scale: f64,
    /// Whether the simulation is paused.
    pub paused: bool,
}

impl SimulationClock {
    /// Whether frames should advance the simulation at all.
    pub fn is_running(&self) -> bool {
        !self.paused && self.scale > 0.0
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            scale: 1.0,
            paused: false,
        }
    }
}
