//! Impact detection and impact records.
//!
//! After each integration step the impactor's center is tested against the
//! primary's surface. On the first crossing an `ImpactRecord` is built from
//! the impactor's state, converted back to real units and run through the
//! crater model.

use bevy::math::DVec3;

use crate::config::SimulationConfig;
use crate::crater::crater_size;
use crate::error::Result;
use crate::hazard::{joules_to_megatons, kinetic_energy, sphere_mass};
use crate::launch::Impactor;
use crate::types::{KM_TO_M, PrimaryBody};

/// Outcome of a single impact, emitted once.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactRecord {
    /// Crater diameter (m).
    pub crater_diameter_m: f64,
    /// Crater depth (m).
    pub crater_depth_m: f64,
    /// Impact point in the primary's body frame (internal units).
    ///
    /// The primary never rotates here, so this is also the simulation frame.
    /// A host drawing a spinning primary must rotate this point by the
    /// primary's orientation at impact time before placing anything on it.
    pub impact_point: DVec3,
    /// Impact speed (km/s).
    pub impact_speed_km_s: f64,
    /// Impactor mass (kg).
    pub impactor_mass_kg: f64,
    /// Kinetic energy at impact (J).
    pub energy_joules: f64,
}

impl ImpactRecord {
    /// Kinetic energy in megatons of TNT.
    pub fn energy_megatons(&self) -> f64 {
        joules_to_megatons(self.energy_joules)
    }

    /// Crater diameter in kilometers.
    pub fn crater_diameter_km(&self) -> f64 {
        self.crater_diameter_m / KM_TO_M
    }
}

/// True once the impactor's center is on or inside the primary.
#[inline]
pub fn has_impacted(impactor: &Impactor, primary: &PrimaryBody) -> bool {
    primary.contains(impactor.state.pos)
}

/// Build the impact record for an impactor that has reached the surface.
///
/// The primary does not rotate, so the body frame coincides with the
/// simulation frame.
///
/// # Errors
/// `InvalidImpactInputs` if speed, size or density is non-positive.
pub fn impact_record(impactor: &Impactor, config: &SimulationConfig) -> Result<ImpactRecord> {
    let scale = config.unit_scale();

    let speed_km_s = scale.to_km(impactor.state.vel.length());
    let speed_m_s = speed_km_s * KM_TO_M;
    let radius_m = scale.to_meters(impactor.radius);

    let crater = crater_size(2.0 * radius_m, impactor.density, config.target_density, speed_m_s)?;

    let mass = sphere_mass(radius_m, impactor.density);

    Ok(ImpactRecord {
        crater_diameter_m: crater.diameter_m,
        crater_depth_m: crater.depth_m,
        impact_point: impactor.state.pos - PrimaryBody::CENTER,
        impact_speed_km_s: speed_km_s,
        impactor_mass_kg: mass,
        energy_joules: kinetic_energy(mass, speed_m_s),
    })
}
