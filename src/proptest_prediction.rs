//! Property-based tests for trajectory prediction using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;

use crate::physics;
use crate::prediction::predict_trajectory;
use crate::test_utils::fixtures;
use crate::types::BodyState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The path is capped at `max_steps`, starts one step after the input
    /// state and only stops early on reaching the surface.
    #[test]
    fn prop_predictor_bounds(
        distance in 100.5f64..600.0,
        polar in 0.0f64..std::f64::consts::PI,
        azimuth in -3.1f64..3.1,
        vx in -0.5f64..0.5,
        vy in -0.5f64..0.5,
        vz in -0.5f64..0.5,
        max_steps in 0usize..400,
        dt in 0.1f64..5.0,
    ) {
        let primary = fixtures::primary();
        let start = BodyState::new(
            crate::geometry::polar_to_cartesian(distance, polar, azimuth),
            DVec3::new(vx, vy, vz),
        );

        let path = predict_trajectory(start, &primary, max_steps, dt);

        prop_assert!(path.len() <= max_steps);
        if let Some(first) = path.points.first() {
            prop_assert_eq!(*first, physics::step(start, &primary, dt).pos);
        }
        if path.ends_in_impact {
            prop_assert!(primary.contains(path.points[path.len() - 1]));
            for p in &path.points[..path.len() - 1] {
                prop_assert!(!primary.contains(*p));
            }
        } else {
            prop_assert_eq!(path.len(), max_steps);
        }
    }
}
