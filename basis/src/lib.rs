//! Plane-wave basis enumeration and bit-packed determinant storage for FCIQMC.
//!
//! Two independent containers live here:
//!
//! - [`PlaneWave`]: the k-points inside a kinetic energy cutoff, sorted by
//!   ascending kinetic energy.
//! - [`Walkers`]: a fixed-length array of determinants over a runtime-sized
//!   spin-orbital space, with per-byte occupation lookup tables.

pub mod determinant;
pub mod error;
pub mod kpoint;
pub mod plane_wave;

#[cfg(test)]
mod plane_wave_test;

pub use determinant::{Determinant, OccupationLut, OccupationTables, Walkers};
pub use error::{BasisError, Result};
pub use kpoint::{compare_kinetic, kinetic, KPoint};
pub use plane_wave::{PlaneWave, PlaneWaveBuilder};
