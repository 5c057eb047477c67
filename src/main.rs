//! Earthfall - Asteroid Impact Simulator
//!
//! Headless driver: spawns a preset, launches it, and runs the simulation
//! until impact, logging the outcome.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use earthfall::presets::{PRESETS, find_preset};
use earthfall::{SimulationController, SimulationPhase, SimulationPlugin};

/// Frames to run before giving up on an impact.
const MAX_FRAMES: usize = 500_000;

fn main() {
    let preset_name = std::env::args().nth(1).unwrap_or_else(|| "Sandbox".to_string());

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), SimulationPlugin));

    let Some(preset) = find_preset(&preset_name) else {
        let names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
        error!("Unknown preset '{}'. Available: {}", preset_name, names.join(", "));
        return;
    };

    {
        let mut controller = app.world_mut().resource_mut::<SimulationController>();
        if let Err(err) = controller.spawn(&preset.launch_parameters()) {
            error!("Could not spawn '{}': {}", preset.name, err);
            return;
        }
        if let Err(err) = controller.launch() {
            error!("Could not launch '{}': {}", preset.name, err);
            return;
        }
    }

    for frame in 0..MAX_FRAMES {
        app.update();

        let controller = app.world().resource::<SimulationController>();
        if controller.phase() == SimulationPhase::Impacted {
            if let Some(zones) = controller.zones() {
                info!(
                    "{} hit after {} frames at lat {:.2}°, lon {:.2}°; zone radii {:?}",
                    preset.name,
                    frame + 1,
                    zones.lat.to_degrees(),
                    zones.lon.to_degrees(),
                    zones.radii,
                );
            }
            return;
        }
    }

    warn!("{} did not impact within {} frames", preset.name, MAX_FRAMES);
}
