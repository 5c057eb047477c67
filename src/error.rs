//! Error types for the impact simulation core.
//!
//! Every error is local to the command that produced it: the controller
//! rejects the command and keeps its previous state.

/// Errors returned by simulation commands and pure physics helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A launch parameter was non-finite or out of range. Nothing was mutated.
    #[error("invalid launch parameter `{field}`: {value}")]
    InvalidLaunchParameters {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Launch or tug was requested while no impactor is spawned.
    #[error("no active impactor")]
    NoActiveImpactor,

    /// Attempted to normalize a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// Non-positive physical quantity reached the crater model.
    #[error(
        "invalid impact inputs (diameter {diameter_m} m, density {density} kg/m³, speed {speed_m_s} m/s)"
    )]
    InvalidImpactInputs {
        /// Impactor diameter in meters.
        diameter_m: f64,
        /// Impactor density in kg/m³.
        density: f64,
        /// Impact speed in m/s.
        speed_m_s: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;
