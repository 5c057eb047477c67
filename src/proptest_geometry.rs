//! Property-based tests for spherical coordinate conversion.

use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::Spherical;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// (lat, lon) → Cartesian → (lat, lon) recovers the original pair.
    #[test]
    fn prop_lat_lon_round_trip(
        lat in -FRAC_PI_2 + 1e-3..FRAC_PI_2 - 1e-3,
        lon in -PI + 1e-9..PI,
        radius in 1.0f64..1000.0,
    ) {
        let point = Spherical::new(lat, lon, radius).to_cartesian();
        let back = Spherical::from_cartesian(point).unwrap();

        prop_assert!((back.lat - lat).abs() < 1e-6, "lat {} -> {}", lat, back.lat);
        prop_assert!((back.lon - lon).abs() < 1e-6, "lon {} -> {}", lon, back.lon);
        prop_assert!((back.radius - radius).abs() < 1e-6 * radius);
    }

    /// Cartesian → spherical → Cartesian reproduces the point, poles included.
    #[test]
    fn prop_cartesian_round_trip(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        z in -500.0f64..500.0,
    ) {
        let p = bevy::math::DVec3::new(x, y, z);
        prop_assume!(p.length() > 1e-6);

        let back = Spherical::from_cartesian(p).unwrap().to_cartesian();
        prop_assert!((back - p).length() < 1e-6 * p.length().max(1.0));
    }

    /// Exact poles report longitude 0 regardless of radius.
    #[test]
    fn prop_poles_have_zero_longitude(radius in 0.1f64..1e4, north in any::<bool>()) {
        let y = if north { radius } else { -radius };
        let s = Spherical::from_cartesian(bevy::math::DVec3::new(0.0, y, 0.0)).unwrap();
        prop_assert_eq!(s.lon, 0.0);
        prop_assert!((s.lat.abs() - FRAC_PI_2).abs() < 1e-12);
    }
}
