//! Named impactor presets.
//!
//! Catalog entries describe a close approach as a geocentric position in
//! spherical form (distance in AU, polar angle and azimuth in degrees) plus
//! physical size and density. Fetching the catalog is the host's job; this
//! module only turns an entry into `LaunchParameters`.

use crate::launch::LaunchParameters;
use crate::types::{AU_TO_KM, DEG_TO_RAD, EARTH_RADIUS_KM};

/// One catalog record.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    /// Geocentric distance at close approach (AU).
    pub r_au: f64,
    /// Polar angle from the reference pole (degrees).
    pub theta_deg: f64,
    /// Azimuth (degrees).
    pub phi_deg: f64,
    /// Physical radius (km), if known.
    pub radius_km: Option<f64>,
    /// Bulk density (kg/m³), if known.
    pub density: Option<f64>,
}

/// Radius assumed for entries without a measured diameter (km).
pub const FALLBACK_RADIUS_KM: f64 = 0.05;

/// Built-in presets.
pub static PRESETS: &[CatalogEntry] = &[
    // Default scenario, expressed as a catalog entry
    CatalogEntry {
        name: "Sandbox",
        r_au: (10_000.0 + EARTH_RADIUS_KM) / AU_TO_KM,
        theta_deg: 2.0 / DEG_TO_RAD,
        phi_deg: 2.0 / DEG_TO_RAD,
        radius_km: Some(2000.0),
        density: None,
    },
    CatalogEntry {
        name: "99942 Apophis",
        r_au: 2.54e-4,
        theta_deg: 71.3,
        phi_deg: -38.6,
        radius_km: Some(0.17),
        density: Some(3200.0),
    },
    CatalogEntry {
        name: "2023 BU",
        r_au: 6.6e-5,
        theta_deg: 124.0,
        phi_deg: 12.5,
        radius_km: Some(0.0026),
        density: None,
    },
    CatalogEntry {
        name: "367943 Duende",
        r_au: 1.86e-4,
        theta_deg: 33.8,
        phi_deg: 151.2,
        radius_km: Some(0.02),
        density: Some(2000.0),
    },
];

impl CatalogEntry {
    /// Launch parameters placing the body at the catalogued position, at rest,
    /// aimed straight at the primary.
    ///
    /// Unknown density maps to 0 (use the configured default); unknown radius
    /// falls back to [`FALLBACK_RADIUS_KM`].
    pub fn launch_parameters(&self) -> LaunchParameters {
        let distance_from_center_km = self.r_au * AU_TO_KM;
        LaunchParameters {
            distance_km: (distance_from_center_km - EARTH_RADIUS_KM).max(0.0),
            azimuth: self.phi_deg * DEG_TO_RAD,
            polar: self.theta_deg * DEG_TO_RAD,
            speed: 0.0,
            offset_azimuth: 0.0,
            offset_polar: 0.0,
            radius_km: self.radius_km.unwrap_or(FALLBACK_RADIUS_KM),
            density: self.density.unwrap_or(0.0),
        }
    }
}

/// Look up a preset by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<&'static CatalogEntry> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
