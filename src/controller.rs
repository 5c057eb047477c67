//! Simulation controller: owns the live impactor, its preview and the
//! impact zones, and orders the per-tick work.
//!
//! Each tick while in flight runs, in order:
//! 1. Gravity step
//! 2. Tug step (if a tug is attached)
//! 3. Impact check
//!
//! and once impacted, only the zone growth animation advances.
//!
//! All mutation goes through `spawn`, `launch`, `activate_tug` and `tick`;
//! renderers read snapshots.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{ImpactRecord, has_impacted, impact_record};
use crate::config::{SimulationClock, SimulationConfig};
use crate::deflection::Tug;
use crate::error::{Result, SimulationError};
use crate::launch::{Impactor, LaunchParameters, spawn_impactor};
use crate::physics;
use crate::prediction::{TrajectoryPath, predict_trajectory};
use crate::zones::{ImpactZoneSet, ZoneSnapshot};

/// Plugin driving the simulation from Bevy's `Update` schedule.
///
/// Uses an existing `SimulationConfig` resource if the host inserted one.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(SimulationController::new(config.clone()))
            .insert_resource(config)
            .init_resource::<SimulationClock>()
            .add_systems(Update, advance_simulation);
    }
}

/// Advance the controller by one frame's worth of ticks.
pub fn advance_simulation(
    mut controller: ResMut<SimulationController>,
    clock: Res<SimulationClock>,
) {
    // Paused, or a zero/negative time scale
    if !clock.is_running() {
        return;
    }

    let dt = controller.config().time_step * clock.scale;
    if let TickOutcome::Impacted(record) = controller.tick(dt) {
        info!(
            "IMPACT! {:.2} km/s, crater {:.2} km wide, {:.2} km deep, {:.3e} Mt",
            record.impact_speed_km_s,
            record.crater_diameter_km(),
            record.crater_depth_m / 1000.0,
            record.energy_megatons(),
        );
    }
}

/// Coarse phase of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Nothing launched yet. A spawned impactor shows its preview.
    Idle,
    /// Launched and integrating every tick.
    InFlight,
    /// Impactor destroyed, zones animating.
    Impacted,
}

/// Result of one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    None,
    /// The impactor reached the surface this tick. Emitted once per impact.
    Impacted(ImpactRecord),
}

/// Read-only view of the live impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactorSnapshot {
    pub position: DVec3,
    pub velocity: DVec3,
    pub radius: f64,
}

impl From<&Impactor> for ImpactorSnapshot {
    fn from(impactor: &Impactor) -> Self {
        Self {
            position: impactor.state.pos,
            velocity: impactor.state.vel,
            radius: impactor.radius,
        }
    }
}

/// A spawned impactor waiting for launch, with its preview.
#[derive(Clone, Debug)]
struct Pending {
    impactor: Impactor,
    tug: Option<Tug>,
    preview: TrajectoryPath,
}

#[derive(Clone, Debug)]
enum ControllerState {
    Idle(Option<Pending>),
    InFlight { impactor: Impactor, tug: Option<Tug> },
    Impacted(ImpactZoneSet),
}

/// Owner of all simulation state.
#[derive(Resource)]
pub struct SimulationController {
    config: SimulationConfig,
    state: ControllerState,
    last_impact: Option<ImpactRecord>,
    rng: StdRng,
}

impl SimulationController {
    /// Controller with an entropy-seeded tug direction source.
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Controller with a fixed seed, for reproducible tug directions.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SimulationConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: ControllerState::Idle(None),
            last_impact: None,
            rng,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replace the live impactor with a new one built from `params`.
    ///
    /// Discards any previous impactor, tug, preview and impact zones, and
    /// computes a fresh preview. On error nothing changes.
    pub fn spawn(&mut self, params: &LaunchParameters) -> Result<()> {
        let impactor = match spawn_impactor(params, &self.config) {
            Ok(impactor) => impactor,
            Err(err) => {
                warn!("Rejected spawn: {}", err);
                return Err(err);
            }
        };

        let preview = predict_trajectory(
            impactor.state,
            &self.config.primary(),
            self.config.prediction_steps,
            self.config.prediction_dt,
        );

        info!(
            "Spawning impactor {:.0} km above the surface at {:.2} km/tick (preview {} points{})",
            params.distance_km,
            params.speed,
            preview.len(),
            if preview.ends_in_impact { ", impacts" } else { "" },
        );

        self.state = ControllerState::Idle(Some(Pending {
            impactor,
            tug: None,
            preview,
        }));
        self.last_impact = None;
        Ok(())
    }

    /// Start integrating the spawned impactor. The preview is discarded.
    ///
    /// Launching an impactor already in flight is a no-op.
    pub fn launch(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, ControllerState::Idle(None)) {
            ControllerState::Idle(Some(pending)) => {
                info!("Launching impactor");
                self.state = ControllerState::InFlight {
                    impactor: pending.impactor,
                    tug: pending.tug,
                };
                Ok(())
            }
            in_flight @ ControllerState::InFlight { .. } => {
                debug!("Launch ignored: impactor already in flight");
                self.state = in_flight;
                Ok(())
            }
            other => {
                self.state = other;
                warn!("Launch rejected: no active impactor");
                Err(SimulationError::NoActiveImpactor)
            }
        }
    }

    /// Attach a tug to the live impactor. A second activation is ignored.
    pub fn activate_tug(&mut self) -> Result<()> {
        let slot = match &mut self.state {
            ControllerState::Idle(Some(pending)) => &mut pending.tug,
            ControllerState::InFlight { tug, .. } => tug,
            _ => {
                warn!("Tug rejected: no active impactor");
                return Err(SimulationError::NoActiveImpactor);
            }
        };

        if slot.is_some() {
            debug!("Tug already active");
            return Ok(());
        }

        let tug = Tug::activate(&mut self.rng, self.config.tug_acceleration);
        info!("Tug attached, pushing {:?}", tug.direction());
        *slot = Some(tug);
        Ok(())
    }

    /// Advance the simulation by `dt` ticks.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        if !(dt.is_finite() && dt > 0.0) {
            warn!("Ignoring tick with invalid dt {}", dt);
            return TickOutcome::None;
        }

        match &mut self.state {
            ControllerState::Idle(_) => TickOutcome::None,
            ControllerState::Impacted(zones) => {
                zones.tick();
                TickOutcome::None
            }
            ControllerState::InFlight { impactor, tug } => {
                let primary = self.config.primary();

                let mut state = physics::step(impactor.state, &primary, dt);
                if let Some(tug) = tug {
                    state = tug.apply(state, dt);
                }
                impactor.state = state;

                if !has_impacted(impactor, &primary) {
                    return TickOutcome::None;
                }

                let impactor = impactor.clone();
                self.resolve_impact(&impactor)
            }
        }
    }

    fn resolve_impact(&mut self, impactor: &Impactor) -> TickOutcome {
        let result = impact_record(impactor, &self.config).and_then(|record| {
            let zones = ImpactZoneSet::new(
                record.impact_point,
                record.crater_diameter_m,
                &self.config.primary(),
                &self.config,
            )?;
            Ok((record, zones))
        });

        match result {
            Ok((record, zones)) => {
                self.state = ControllerState::Impacted(zones);
                self.last_impact = Some(record.clone());
                TickOutcome::Impacted(record)
            }
            Err(err) => {
                error!("Impact could not be resolved, discarding impactor: {}", err);
                self.state = ControllerState::Idle(None);
                TickOutcome::None
            }
        }
    }

    pub fn phase(&self) -> SimulationPhase {
        match self.state {
            ControllerState::Idle(_) => SimulationPhase::Idle,
            ControllerState::InFlight { .. } => SimulationPhase::InFlight,
            ControllerState::Impacted(_) => SimulationPhase::Impacted,
        }
    }

    /// The live impactor, launched or not.
    pub fn impactor(&self) -> Option<ImpactorSnapshot> {
        match &self.state {
            ControllerState::Idle(Some(pending)) => Some((&pending.impactor).into()),
            ControllerState::InFlight { impactor, .. } => Some(impactor.into()),
            _ => None,
        }
    }

    /// Preview path, present only before launch.
    pub fn predicted_path(&self) -> Option<&TrajectoryPath> {
        match &self.state {
            ControllerState::Idle(Some(pending)) => Some(&pending.preview),
            _ => None,
        }
    }

    /// Attached tug, if any.
    pub fn tug(&self) -> Option<Tug> {
        match &self.state {
            ControllerState::Idle(Some(pending)) => pending.tug,
            ControllerState::InFlight { tug, .. } => *tug,
            _ => None,
        }
    }

    /// Impact zones, present only after an impact.
    pub fn zones(&self) -> Option<ZoneSnapshot> {
        match &self.state {
            ControllerState::Impacted(zones) => Some(zones.snapshot()),
            _ => None,
        }
    }

    /// Most recent impact since the last spawn.
    pub fn last_impact(&self) -> Option<&ImpactRecord> {
        self.last_impact.as_ref()
    }
}
