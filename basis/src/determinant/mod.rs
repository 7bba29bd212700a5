//! Determinant storage in occupation-number representation
//!
//! A determinant is a bit string over spin-orbitals: bit `i` set means
//! spin-orbital `i` is occupied. The length is only known at runtime, so
//! [`Determinant`] packs the bits into `u64` words with a stored length.
//!
//! [`Walkers`] owns a set of determinants of equal length together with the
//! [`OccupationTables`] used to extract occupied orbitals one byte at a time.

mod bitset;
mod lut;
mod walkers;


pub use bitset::{Determinant, Ones};
pub use lut::{OccupationLut, OccupationTables, CHUNK_BITS, CHUNK_VALUES};
pub use walkers::Walkers;
