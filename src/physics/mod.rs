//! Physics integration for the impactor.
//!
//! Point-mass gravity toward the primary's center, advanced with
//! semi-implicit (symplectic) Euler at a fixed timestep.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::gravity_acceleration;
pub use integrator::step;
