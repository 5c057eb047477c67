//! Tug deflection.
//!
//! A tug attaches to the live impactor and pushes it with a constant
//! acceleration along one of the four in-plane axes. The axis is drawn
//! once, at activation, from an injected random source and never changes.
//! Unlike gravity, the push applies at any distance from the primary.

use bevy::math::DVec3;
use rand::Rng;

use crate::types::BodyState;

/// Axis a tug can push along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TugDirection {
    PosX,
    NegX,
    PosY,
    NegY,
}

impl TugDirection {
    pub const ALL: [TugDirection; 4] = [
        TugDirection::PosX,
        TugDirection::NegX,
        TugDirection::PosY,
        TugDirection::NegY,
    ];

    /// Draw one direction uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Unit vector for this axis.
    pub fn unit(self) -> DVec3 {
        match self {
            TugDirection::PosX => DVec3::X,
            TugDirection::NegX => DVec3::NEG_X,
            TugDirection::PosY => DVec3::Y,
            TugDirection::NegY => DVec3::NEG_Y,
        }
    }
}

/// An active tug attached to the impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tug {
    direction: TugDirection,
    /// Acceleration magnitude in internal units per tick².
    magnitude: f64,
}

impl Tug {
    /// Attach a tug, choosing its direction from `rng`.
    pub fn activate<R: Rng>(rng: &mut R, magnitude: f64) -> Self {
        Self {
            direction: TugDirection::random(rng),
            magnitude,
        }
    }

    pub fn direction(&self) -> TugDirection {
        self.direction
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Acceleration vector applied each tick.
    pub fn acceleration(&self) -> DVec3 {
        self.direction.unit() * self.magnitude
    }

    /// Apply one tick of tug acceleration to the velocity.
    #[inline]
    pub fn apply(&self, state: BodyState, dt: f64) -> BodyState {
        BodyState {
            pos: state.pos,
            vel: state.vel + self.acceleration() * dt,
        }
    }
}
