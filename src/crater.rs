//! Crater size from impactor properties.
//!
//! Pi-group scaling law:
//!
//! ```text
//! D = k · (ρ_i / ρ_t)^(1/3) · L^ν · v^μ
//! ```
//!
//! with impactor diameter `L` in meters and speed `v` in m/s. The constants
//! are empirical and kept as-is.

use crate::error::{Result, SimulationError};

/// Scaling coefficient k.
pub const CRATER_K: f64 = 1.161;

/// Velocity exponent μ.
pub const CRATER_MU: f64 = 0.55;

/// Impactor-size exponent ν.
pub const CRATER_NU: f64 = 0.4;

/// Crater depth as a fraction of its diameter.
pub const DEPTH_TO_DIAMETER: f64 = 0.2;

/// Default target-surface density (kg/m³), continental crust.
pub const TARGET_DENSITY: f64 = 2700.0;

/// Final crater dimensions in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    pub diameter_m: f64,
    pub depth_m: f64,
}

/// Scale an impact into a crater.
///
/// # Arguments
/// * `impactor_diameter_m` - Impactor diameter in meters
/// * `impactor_density` - Impactor density in kg/m³
/// * `target_density` - Target surface density in kg/m³
/// * `speed_m_s` - Impact speed in m/s
///
/// # Errors
/// `InvalidImpactInputs` if any quantity is non-positive or non-finite.
pub fn crater_size(
    impactor_diameter_m: f64,
    impactor_density: f64,
    target_density: f64,
    speed_m_s: f64,
) -> Result<Crater> {
    let positive = |x: f64| x.is_finite() && x > 0.0;
    if !(positive(impactor_diameter_m)
        && positive(impactor_density)
        && positive(target_density)
        && positive(speed_m_s))
    {
        return Err(SimulationError::InvalidImpactInputs {
            diameter_m: impactor_diameter_m,
            density: impactor_density,
            speed_m_s,
        });
    }

    let density_ratio = (impactor_density / target_density).cbrt();
    let diameter_m = CRATER_K
        * density_ratio
        * impactor_diameter_m.powf(CRATER_NU)
        * speed_m_s.powf(CRATER_MU);

    Ok(Crater {
        diameter_m,
        depth_m: DEPTH_TO_DIAMETER * diameter_m,
    })
}
