//! Property-based tests for impactor spawning using proptest.

use proptest::prelude::*;

use crate::config::SimulationConfig;
use crate::launch::{LaunchParameters, spawn_impactor};
use crate::prediction::predict_trajectory;

fn launch_strategy() -> impl Strategy<Value = LaunchParameters> {
    (
        0.0f64..500_000.0,
        -10.0f64..10.0,
        -10.0f64..10.0,
        0.0f64..50.0,
        -3.2f64..3.2,
        -3.2f64..3.2,
        1e-4f64..5_000.0,
        prop_oneof![Just(0.0), 500.0f64..8_000.0],
    )
        .prop_map(
            |(distance_km, azimuth, polar, speed, offset_azimuth, offset_polar, radius_km, density)| {
                LaunchParameters {
                    distance_km,
                    azimuth,
                    polar,
                    speed,
                    offset_azimuth,
                    offset_polar,
                    radius_km,
                    density,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The spawned body sits at the requested altitude, moves at the
    /// requested speed and carries a positive density.
    #[test]
    fn prop_spawn_distance_and_speed(params in launch_strategy()) {
        let config = SimulationConfig::default();
        let scale = config.unit_scale();
        let impactor = spawn_impactor(&params, &config).unwrap();

        let expected = scale.to_internal(params.distance_km + config.primary_real_radius_km);
        let actual = impactor.state.pos.length();
        prop_assert!(
            (actual - expected).abs() <= 1e-9 * expected,
            "spawned at {} instead of {}", actual, expected
        );

        let speed = scale.to_internal(params.speed);
        prop_assert!((impactor.state.vel.length() - speed).abs() <= 1e-9 * speed.max(1.0));
        prop_assert!(impactor.density > 0.0);
        prop_assert!(impactor.radius >= config.min_visible_radius);
    }

    /// A spawned body's preview never exceeds the configured step cap.
    #[test]
    fn prop_spawn_preview_respects_cap(
        params in launch_strategy(),
        max_steps in 0usize..300,
    ) {
        let config = SimulationConfig::default();
        let impactor = spawn_impactor(&params, &config).unwrap();
        let path = predict_trajectory(
            impactor.state,
            &config.primary(),
            max_steps,
            config.prediction_dt,
        );
        prop_assert!(path.len() <= max_steps);
    }
}
