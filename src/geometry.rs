//! Vector helpers and spherical coordinate conversion.
//!
//! Arithmetic itself comes from `DVec3`; this module adds the fallible
//! normalization and the latitude/longitude frame used to anchor impact
//! zones on the primary's surface.
//!
//! Frame convention is y-up: latitude is measured from the xz-plane toward +y,
//! longitude is measured in the xz-plane from +x toward +z.

use bevy::math::DVec3;

use crate::error::{Result, SimulationError};

/// Below this horizontal magnitude (after normalization) longitude is undefined.
const POLE_EPSILON: f64 = 1e-12;

/// Normalize a vector, failing on zero (or non-finite) length.
#[inline]
pub fn normalize(v: DVec3) -> Result<DVec3> {
    v.try_normalize().ok_or(SimulationError::DegenerateVector)
}

/// A point on a sphere centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    /// Latitude in radians, in [-π/2, π/2].
    pub lat: f64,
    /// Longitude in radians, in (-π, π].
    pub lon: f64,
    /// Distance from the origin.
    pub radius: f64,
}

impl Spherical {
    pub fn new(lat: f64, lon: f64, radius: f64) -> Self {
        Self { lat, lon, radius }
    }

    /// Cartesian point for this (lat, lon, radius) triple.
    pub fn to_cartesian(&self) -> DVec3 {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        DVec3::new(
            self.radius * cos_lat * cos_lon,
            self.radius * sin_lat,
            self.radius * cos_lat * sin_lon,
        )
    }

    /// Latitude/longitude of a Cartesian point.
    ///
    /// At the poles longitude is reported as 0. The origin itself has no
    /// direction and is rejected.
    pub fn from_cartesian(point: DVec3) -> Result<Self> {
        let radius = point.length();
        let unit = normalize(point)?;

        let lat = unit.y.clamp(-1.0, 1.0).asin();
        let horizontal = (unit.x * unit.x + unit.z * unit.z).sqrt();
        let lon = if horizontal < POLE_EPSILON {
            0.0
        } else {
            unit.z.atan2(unit.x)
        };

        Ok(Self { lat, lon, radius })
    }
}

/// Point at `distance` from the origin given a polar angle (from +y) and an
/// azimuth (in the xz-plane from +x).
///
/// This is the placement convention used for launch parameters.
pub fn polar_to_cartesian(distance: f64, polar: f64, azimuth: f64) -> DVec3 {
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    DVec3::new(
        distance * sin_p * cos_a,
        distance * cos_p,
        distance * sin_p * sin_a,
    )
}
