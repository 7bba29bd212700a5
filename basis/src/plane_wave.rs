//! k-point mesh bounded by a kinetic energy cutoff.
//!
//! A [`PlaneWaveBuilder`] stages k-points and may still change its cutoff;
//! [`PlaneWaveBuilder::build`] freezes it into a sorted, read-only
//! [`PlaneWave`]. Once built, the cutoff of a basis always describes the mesh
//! it was enumerated from.

use crate::error::{BasisError, Result};
use crate::kpoint::{compare_kinetic, kinetic, KPoint};
use itertools::iproduct;
use std::ops::Index;
use tracing::{debug, info};

fn validate_cutoff(cutoff: f64) -> Result<()> {
    if cutoff.is_nan() || cutoff < 0.0 {
        return Err(BasisError::invalid(format!(
            "cannot set a negative cutoff: {}",
            cutoff
        )));
    }
    Ok(())
}

/// Mutable staging area for a k-point mesh.
#[derive(Debug, Clone)]
pub struct PlaneWaveBuilder {
    cutoff: f64,
    mesh: Vec<KPoint>,
}

impl PlaneWaveBuilder {
    pub fn new(cutoff: f64) -> Result<Self> {
        validate_cutoff(cutoff)?;
        Ok(Self {
            cutoff,
            mesh: Vec::new(),
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Replace the cutoff. Points already staged are left alone; only a later
    /// [`enumerate`](Self::enumerate) uses the new value.
    pub fn set_cutoff(&mut self, cutoff: f64) -> Result<()> {
        validate_cutoff(cutoff)?;
        self.cutoff = cutoff;
        Ok(())
    }

    /// Append a k-point to the end of the mesh. No ordering or uniqueness
    /// check is made here; call [`sort`](Self::sort) afterwards.
    pub fn append(&mut self, k: KPoint) {
        self.mesh.push(k);
    }

    /// Add every k-point with kinetic energy <= cutoff.
    ///
    /// Indices are scanned over the cube [-kMax, kMax]^3 with
    /// kMax = ceil(cutoff^2), which always contains the cutoff sphere.
    pub fn enumerate(&mut self) -> Result<()> {
        let k_max = (self.cutoff * self.cutoff).ceil();
        if k_max < 0.0 {
            return Err(BasisError::invalid("cannot set a negative kMax"));
        }
        if k_max > i32::MAX as f64 {
            return Err(BasisError::invalid(format!(
                "kMax {} does not fit a k-point index",
                k_max
            )));
        }
        let k_max = k_max as i32;
        debug!("Enumerating k-points over [-{k_max}, {k_max}]^3");

        let before = self.mesh.len();
        for (n, m, l) in iproduct!(-k_max..=k_max, -k_max..=k_max, -k_max..=k_max) {
            let k = KPoint::new(n, m, l);
            if kinetic(&k) <= self.cutoff {
                self.append(k);
            }
        }
        debug!("Retained {} k-points", self.mesh.len() - before);
        Ok(())
    }

    /// Sort the mesh by ascending kinetic energy. Degenerate points end up in
    /// no particular order.
    pub fn sort(&mut self) {
        self.mesh.sort_unstable_by(compare_kinetic);
    }

    pub fn len(&self) -> usize {
        self.mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Sort and freeze the mesh.
    pub fn build(mut self) -> PlaneWave {
        self.sort();
        PlaneWave {
            cutoff: self.cutoff,
            mesh: self.mesh,
        }
    }
}

/// Immutable k-point mesh sorted by ascending kinetic energy.
#[derive(Debug, Clone)]
pub struct PlaneWave {
    cutoff: f64,
    mesh: Vec<KPoint>,
}

impl PlaneWave {
    /// Enumerate and sort every k-point within `cutoff`.
    pub fn new(cutoff: f64) -> Result<Self> {
        let mut builder = PlaneWaveBuilder::new(cutoff)?;
        builder.enumerate()?;
        let plane_wave = builder.build();

        info!(
            "k-point mesh with cutoff {} contains {} points",
            plane_wave.cutoff,
            plane_wave.len()
        );
        Ok(plane_wave)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Bounds-checked access to the `index`-th k-point.
    pub fn get(&self, index: usize) -> Result<&KPoint> {
        self.mesh.get(index).ok_or(BasisError::OutOfRange {
            index,
            len: self.mesh.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KPoint> {
        self.mesh.iter()
    }

    pub fn as_slice(&self) -> &[KPoint] {
        &self.mesh
    }

    pub fn len(&self) -> usize {
        self.mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Kinetic energy of the highest point in the mesh, or `None` when empty.
    pub fn max_kinetic(&self) -> Option<f64> {
        self.mesh.last().map(kinetic)
    }

    pub fn is_sorted(&self) -> bool {
        self.mesh
            .windows(2)
            .all(|pair| kinetic(&pair[0]) <= kinetic(&pair[1]))
    }
}

impl Index<usize> for PlaneWave {
    type Output = KPoint;

    fn index(&self, index: usize) -> &KPoint {
        &self.mesh[index]
    }
}

impl<'a> IntoIterator for &'a PlaneWave {
    type Item = &'a KPoint;
    type IntoIter = std::slice::Iter<'a, KPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.mesh.iter()
    }
}
