//! Impact energy and approximate Torino hazard rating.
//!
//! The Torino estimate is a coarse threshold ladder over impact probability
//! and kinetic energy; it rates nearly every catalogued object as 0.

use std::f64::consts::PI;

use crate::types::{JOULES_PER_MEGATON, KM_TO_M};

/// Geometric albedo assumed when none is known.
pub const DEFAULT_ALBEDO: f64 = 0.14;

/// Hyperbolic excess speed assumed when none is known (km/s).
pub const DEFAULT_V_INFINITY_KM_S: f64 = 17.0;

/// Bulk density assumed when none is known (kg/m³).
pub const DEFAULT_DENSITY: f64 = 3000.0;

/// Mass of a uniform sphere (kg).
#[inline]
pub fn sphere_mass(radius_m: f64, density: f64) -> f64 {
    4.0 / 3.0 * PI * radius_m.powi(3) * density
}

/// Kinetic energy (J).
#[inline]
pub fn kinetic_energy(mass_kg: f64, speed_m_s: f64) -> f64 {
    0.5 * mass_kg * speed_m_s * speed_m_s
}

#[inline]
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

/// Diameter (km) from absolute magnitude H and geometric albedo.
pub fn estimate_diameter_km(h: f64, albedo: f64) -> f64 {
    1329.0 / albedo.sqrt() * 10f64.powf(-0.2 * h)
}

/// Impact energy (Mt TNT) of an object of absolute magnitude H arriving at
/// `v_infinity_km_s` with bulk density `density`.
pub fn estimate_energy_megatons(h: f64, v_infinity_km_s: f64, density: f64) -> f64 {
    let radius_m = estimate_diameter_km(h, DEFAULT_ALBEDO) * KM_TO_M / 2.0;
    let mass = sphere_mass(radius_m, density);
    joules_to_megatons(kinetic_energy(mass, v_infinity_km_s * KM_TO_M))
}

/// Approximate Torino scale rating (0-10).
pub fn approximate_torino(probability: f64, energy_mt: f64) -> u8 {
    if probability < 1e-6 || energy_mt < 1.0 {
        return 0;
    }
    if probability < 1e-5 && energy_mt < 10.0 {
        return 0;
    }
    if probability < 1e-4 {
        return 1;
    }
    if probability < 1e-3 {
        return if energy_mt < 100.0 { 2 } else { 3 };
    }
    if probability < 1e-2 {
        return 4;
    }
    if probability < 0.1 {
        return 5;
    }
    if probability < 1.0 {
        return if energy_mt < 1000.0 { 6 } else { 8 };
    }
    10
}
