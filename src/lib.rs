//! Earthfall - Asteroid Impact Simulator
//!
//! A library crate providing the numeric core of an impact simulation:
//! point-mass gravity around a spherical primary, launch previews, impact
//! detection, crater scaling, surface impact zones and tug deflection.

pub mod collision;
pub mod config;
pub mod controller;
pub mod crater;
pub mod deflection;
pub mod error;
pub mod geometry;
pub mod hazard;
pub mod launch;
pub mod physics;
pub mod prediction;
pub mod presets;
pub mod types;
pub mod zones;

pub use controller::{SimulationController, SimulationPhase, SimulationPlugin, TickOutcome};
pub use error::{Result, SimulationError};
pub use launch::LaunchParameters;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_geometry;

#[cfg(test)]
mod proptest_launch;

#[cfg(test)]
mod proptest_prediction;
