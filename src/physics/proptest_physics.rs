//! Property-based tests for gravity integration using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;

use crate::physics::step;
use crate::test_utils::fixtures;
use crate::types::BodyState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A body dropped with no tangential velocity falls monotonically.
    #[test]
    fn prop_radial_fall_strictly_decreasing(
        distance in 120.0f64..600.0,
        polar in 0.0f64..std::f64::consts::PI,
        azimuth in -3.1f64..3.1,
        inward_speed in 0.0f64..0.5,
    ) {
        let primary = fixtures::primary();
        let pos = crate::geometry::polar_to_cartesian(distance, polar, azimuth);
        let vel = -pos.normalize() * inward_speed;
        let mut state = BodyState::new(pos, vel);
        let mut last = state.pos.length();

        for _ in 0..200_000 {
            if primary.contains(state.pos) {
                break;
            }
            state = step(state, &primary, 1.0);
            let r = state.pos.length();
            prop_assert!(r < last, "distance grew from {} to {}", last, r);
            last = r;
        }

        prop_assert!(primary.contains(state.pos), "body never reached the surface");
    }

    /// Angular momentum is exactly conserved by a central-force kick-drift step.
    #[test]
    fn prop_angular_momentum_conserved(
        distance in 150.0f64..500.0,
        tangential in 0.01f64..0.12,
    ) {
        let primary = fixtures::primary();
        let mut state = BodyState::new(
            DVec3::new(distance, 0.0, 0.0),
            DVec3::new(0.0, 0.0, tangential),
        );
        let initial = state.pos.cross(state.vel);

        for _ in 0..2_000 {
            if primary.contains(state.pos) {
                break;
            }
            state = step(state, &primary, 1.0);
        }

        let last = state.pos.cross(state.vel);
        prop_assert!((last - initial).length() < 1e-9 * initial.length().max(1.0));
    }
}
