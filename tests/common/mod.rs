//! Common test utilities for integration tests.

use earthfall::config::SimulationConfig;
use earthfall::controller::{SimulationController, TickOutcome};
use earthfall::launch::LaunchParameters;

/// Ticks to run before declaring that no impact will happen.
pub const TICK_BUDGET: usize = 200_000;

/// Controller with default config and a fixed tug seed.
pub fn seeded_controller(seed: u64) -> SimulationController {
    SimulationController::with_seed(SimulationConfig::default(), seed)
}

/// Launch parameters for a body at rest at the given altitude and angles.
pub fn drop_from(distance_km: f64, azimuth: f64, polar: f64) -> LaunchParameters {
    LaunchParameters {
        distance_km,
        azimuth,
        polar,
        speed: 0.0,
        offset_azimuth: 0.0,
        offset_polar: 0.0,
        radius_km: 1.0,
        density: 3000.0,
    }
}

/// The default scenario: 10 000 km up, both angles 2 rad, at rest.
pub fn default_scenario() -> LaunchParameters {
    LaunchParameters {
        distance_km: 10_000.0,
        azimuth: 2.0,
        polar: 2.0,
        speed: 0.0,
        offset_azimuth: 0.0,
        offset_polar: 0.0,
        radius_km: 2000.0,
        density: 0.0,
    }
}

/// Tick until an impact is reported, returning the outcome and tick count.
pub fn run_until_impact(controller: &mut SimulationController, dt: f64) -> Option<(TickOutcome, usize)> {
    for i in 0..TICK_BUDGET {
        let outcome = controller.tick(dt);
        if matches!(outcome, TickOutcome::Impacted(_)) {
            return Some((outcome, i + 1));
        }
    }
    None
}
