//! Core physics types and constants for the impact simulation.

use bevy::math::DVec3;

/// Physical constants (real units: km, kg, s)

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in internal simulation units.
pub const EARTH_RADIUS_INTERNAL: f64 = 100.0;

/// Earth standard gravitational parameter (km³/s²).
pub const GM_EARTH_KM3_S2: f64 = 398_600.4418;

/// Astronomical unit in kilometers.
pub const AU_TO_KM: f64 = 1.495978707e8;

/// Kilometers to meters
pub const KM_TO_M: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Conversion between real units (km) and internal simulation units.
///
/// `internal = real / scale`, where `scale = real_radius / internal_radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitScale {
    /// Kilometers per internal unit.
    pub km_per_unit: f64,
}

impl UnitScale {
    /// Build the scale from the primary's real and internal radii.
    pub fn new(real_radius_km: f64, internal_radius: f64) -> Self {
        Self {
            km_per_unit: real_radius_km / internal_radius,
        }
    }

    /// Convert kilometers (or km per tick) into internal units.
    #[inline]
    pub fn to_internal(&self, km: f64) -> f64 {
        km / self.km_per_unit
    }

    /// Convert internal units back to kilometers.
    #[inline]
    pub fn to_km(&self, internal: f64) -> f64 {
        internal * self.km_per_unit
    }

    /// Convert internal units to meters.
    #[inline]
    pub fn to_meters(&self, internal: f64) -> f64 {
        self.to_km(internal) * KM_TO_M
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM, EARTH_RADIUS_INTERNAL)
    }
}

/// The fixed spherical primary ("Earth"), centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryBody {
    /// Radius in internal units. Always positive.
    pub radius: f64,
    /// Gravitational parameter in internal units³ per tick².
    pub gm: f64,
}

impl PrimaryBody {
    /// Center of the primary in the simulation frame.
    pub const CENTER: DVec3 = DVec3::ZERO;

    /// Distance from the primary's center.
    #[inline]
    pub fn distance_to(&self, pos: DVec3) -> f64 {
        (pos - Self::CENTER).length()
    }

    /// True if `pos` lies on or inside the surface.
    #[inline]
    pub fn contains(&self, pos: DVec3) -> bool {
        self.distance_to(pos) <= self.radius
    }
}

/// Kinematic state of a body in internal units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Position relative to the primary's center.
    pub pos: DVec3,
    /// Velocity in internal units per tick.
    pub vel: DVec3,
}

impl BodyState {
    /// Create a new body state
    pub fn new(pos: DVec3, vel: DVec3) -> Self {
        Self { pos, vel }
    }
}
