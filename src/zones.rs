//! Impact zone overlays on the primary's surface.
//!
//! An impact produces three concentric severity rings centered on the
//! impact point's latitude/longitude. All rings share one growth factor,
//! which starts at the configured initial value and creeps toward a cap
//! one step per tick.

use bevy::math::DVec3;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::geometry::Spherical;
use crate::types::{KM_TO_M, PrimaryBody};

/// Severity of a ring, most severe first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneSeverity {
    Primary,
    Secondary,
    Tertiary,
}

impl ZoneSeverity {
    pub const ALL: [ZoneSeverity; 3] = [
        ZoneSeverity::Primary,
        ZoneSeverity::Secondary,
        ZoneSeverity::Tertiary,
    ];
}

/// One severity ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactZone {
    pub severity: ZoneSeverity,
    /// Unscaled radius in internal units.
    pub base_radius: f64,
    /// Overlay opacity in [0, 1].
    pub opacity: f32,
}

/// The three rings produced by one impact.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactZoneSet {
    zones: [ImpactZone; 3],
    anchor: Spherical,
    growth: f64,
    growth_step: f64,
    growth_cap: f64,
}

impl ImpactZoneSet {
    /// Build the rings for an impact at `impact_point` (body frame).
    ///
    /// The anchor is projected onto the primary's surface.
    ///
    /// # Errors
    /// `DegenerateVector` if the impact point is the primary's center.
    pub fn new(
        impact_point: DVec3,
        crater_diameter_m: f64,
        primary: &PrimaryBody,
        config: &SimulationConfig,
    ) -> Result<Self> {
        let local = Spherical::from_cartesian(impact_point - PrimaryBody::CENTER)?;
        let anchor = Spherical::new(local.lat, local.lon, primary.radius);

        let base = config.unit_scale().to_internal(crater_diameter_m / 2.0 / KM_TO_M);
        let zones = std::array::from_fn(|i| ImpactZone {
            severity: ZoneSeverity::ALL[i],
            base_radius: base * config.zone_multipliers[i],
            opacity: config.zone_opacities[i],
        });

        Ok(Self {
            zones,
            anchor,
            growth: config.zone_growth_initial,
            growth_step: config.zone_growth_step,
            growth_cap: config.zone_growth_cap,
        })
    }

    /// Advance the growth animation by one tick.
    pub fn tick(&mut self) {
        if self.growth < self.growth_cap {
            self.growth = (self.growth + self.growth_step).min(self.growth_cap);
        }
    }

    /// Whether growth has reached its cap.
    pub fn is_fully_grown(&self) -> bool {
        self.growth >= self.growth_cap
    }

    pub fn zones(&self) -> &[ImpactZone; 3] {
        &self.zones
    }

    /// Shared growth scale applied to every ring.
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Surface anchor (latitude, longitude, primary radius).
    pub fn anchor(&self) -> Spherical {
        self.anchor
    }

    /// Displayed radius of each ring (base radius × growth).
    pub fn radii(&self) -> [f64; 3] {
        self.zones.map(|z| z.base_radius * self.growth)
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> ZoneSnapshot {
        ZoneSnapshot {
            radii: self.radii(),
            opacities: self.zones.map(|z| z.opacity),
            growth: self.growth,
            lat: self.anchor.lat,
            lon: self.anchor.lon,
            anchor_point: self.anchor.to_cartesian(),
        }
    }
}

/// Copy of the zone set handed to external readers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSnapshot {
    pub radii: [f64; 3],
    pub opacities: [f32; 3],
    pub growth: f64,
    pub lat: f64,
    pub lon: f64,
    /// Anchor on the surface in the body frame.
    pub anchor_point: DVec3,
}
