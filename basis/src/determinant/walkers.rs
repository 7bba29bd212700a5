use super::bitset::Determinant;
use super::lut::OccupationTables;
use crate::error::{BasisError, Result};
use tracing::{debug, info};

/// Walker occupations in determinant space.
///
/// Holds one determinant per walker, all over the same number of
/// spin-orbitals. The walker count is always the length of the determinant
/// array; changing it resizes the array.
#[derive(Debug, Clone)]
pub struct Walkers {
    n_spin_orbitals: usize,
    determinants: Vec<Determinant>,
    occupation_tables: OccupationTables,
}

fn validate_walker_count(n_walkers: usize) -> Result<()> {
    if n_walkers == 0 {
        return Err(BasisError::invalid("cannot set fewer than one walker"));
    }
    Ok(())
}

impl Walkers {
    /// Create `n_walkers` empty determinants over `n_spin_orbitals` and build
    /// the per-byte occupation tables.
    pub fn new(n_walkers: usize, n_spin_orbitals: usize) -> Result<Self> {
        validate_walker_count(n_walkers)?;
        let occupation_tables = OccupationTables::new(n_spin_orbitals);

        info!(
            "Walkers: {} determinants over {} spin-orbitals",
            n_walkers, n_spin_orbitals
        );
        debug!("Built {} occupation lookup tables", occupation_tables.len());

        Ok(Self {
            n_spin_orbitals,
            determinants: vec![Determinant::new(n_spin_orbitals); n_walkers],
            occupation_tables,
        })
    }

    pub fn walker_count(&self) -> usize {
        self.determinants.len()
    }

    /// Resize to `n_walkers` determinants. Growing appends empty determinants,
    /// shrinking drops the trailing ones.
    pub fn resize(&mut self, n_walkers: usize) -> Result<()> {
        validate_walker_count(n_walkers)?;
        self.determinants
            .resize(n_walkers, Determinant::new(self.n_spin_orbitals));
        Ok(())
    }

    /// Same as [`resize`](Self::resize).
    pub fn set_walker_count(&mut self, n_walkers: usize) -> Result<()> {
        self.resize(n_walkers)
    }

    pub fn n_spin_orbitals(&self) -> usize {
        self.n_spin_orbitals
    }

    pub fn determinants(&self) -> &[Determinant] {
        &self.determinants
    }

    pub fn occupation_tables(&self) -> &OccupationTables {
        &self.occupation_tables
    }

    pub fn determinant(&self, walker: usize) -> Result<&Determinant> {
        self.determinants
            .get(walker)
            .ok_or(BasisError::OutOfRange {
                index: walker,
                len: self.determinants.len(),
            })
    }

    fn determinant_mut(&mut self, walker: usize) -> Result<&mut Determinant> {
        let len = self.determinants.len();
        self.determinants
            .get_mut(walker)
            .ok_or(BasisError::OutOfRange { index: walker, len })
    }

    fn check_len(&self, det: &Determinant) -> Result<()> {
        if det.len() != self.n_spin_orbitals {
            return Err(BasisError::invalid(format!(
                "determinant has {} spin-orbitals, expected {}",
                det.len(),
                self.n_spin_orbitals
            )));
        }
        Ok(())
    }

    /// Replace the determinant of one walker.
    pub fn set_determinant(&mut self, walker: usize, det: Determinant) -> Result<()> {
        self.check_len(&det)?;
        *self.determinant_mut(walker)? = det;
        Ok(())
    }

    /// Occupy or empty a single spin-orbital of one walker.
    pub fn set_orbital(&mut self, walker: usize, orbital: usize, occupied: bool) -> Result<()> {
        self.determinant_mut(walker)?.set(orbital, occupied)
    }

    /// Occupied spin-orbitals of one walker via the lookup tables.
    pub fn occupied_orbitals(&self, walker: usize) -> Result<Vec<usize>> {
        self.occupation_tables.occupied(self.determinant(walker)?)
    }

    /// Number of occupied spin-orbitals which differ between two determinants.
    ///
    /// Computed as popcount(a & b) / 2. The halving assumes each determinant
    /// holds an orbital the other does not, so for two identical determinants
    /// this returns half their population, not zero. See
    /// [`excitation_level`](Self::excitation_level) for the xor-based count.
    pub fn n_diff(&self, det_a: &Determinant, det_b: &Determinant) -> Result<usize> {
        Ok(det_a.and(det_b)?.count_ones() / 2)
    }

    /// Number of spin-orbitals occupied in exactly one of the two
    /// determinants, popcount(a ^ b).
    pub fn symmetric_difference(&self, det_a: &Determinant, det_b: &Determinant) -> Result<usize> {
        Ok(det_a.xor(det_b)?.count_ones())
    }

    /// Number of electrons moved to get from `det_a` to `det_b`,
    /// popcount(a ^ b) / 2. Only meaningful for equal particle numbers.
    pub fn excitation_level(&self, det_a: &Determinant, det_b: &Determinant) -> Result<usize> {
        Ok(self.symmetric_difference(det_a, det_b)? / 2)
    }
}
