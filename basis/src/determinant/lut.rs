use super::bitset::Determinant;
use crate::error::{BasisError, Result};

/// Number of orbitals covered by one lookup table.
pub const CHUNK_BITS: usize = 8;
/// Number of distinct chunk values, i.e. entries per table.
pub const CHUNK_VALUES: usize = 1 << CHUNK_BITS;

/// Occupied orbital positions for every possible value of one 8-bit chunk.
///
/// Entry `v` of the table for chunk `c` holds `c * 8 + b` for each bit `b` set
/// in `v`, in ascending order.
#[derive(Debug, Clone)]
pub struct OccupationLut {
    chunk: usize,
    entries: Vec<Vec<usize>>,
}

impl OccupationLut {
    pub fn new(chunk: usize) -> Self {
        let offset = chunk * CHUNK_BITS;
        let entries = (0..CHUNK_VALUES)
            .map(|value| {
                (0..CHUNK_BITS)
                    .filter(|&bit| (value >> bit) & 1 == 1)
                    .map(|bit| offset + bit)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { chunk, entries }
    }

    pub fn chunk(&self) -> usize {
        self.chunk
    }

    pub fn positions(&self, value: u8) -> &[usize] {
        &self.entries[value as usize]
    }
}

/// One [`OccupationLut`] per byte of a determinant over `n_spin_orbitals`.
#[derive(Debug, Clone)]
pub struct OccupationTables {
    n_spin_orbitals: usize,
    tables: Vec<OccupationLut>,
}

impl OccupationTables {
    pub fn new(n_spin_orbitals: usize) -> Self {
        let tables = (0..n_spin_orbitals.div_ceil(CHUNK_BITS))
            .map(OccupationLut::new)
            .collect();
        Self {
            n_spin_orbitals,
            tables,
        }
    }

    pub fn n_spin_orbitals(&self) -> usize {
        self.n_spin_orbitals
    }

    /// Number of tables, ceil(n_spin_orbitals / 8).
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, chunk: usize) -> Option<&OccupationLut> {
        self.tables.get(chunk)
    }

    fn check_len(&self, det: &Determinant) -> Result<()> {
        if det.len() != self.n_spin_orbitals {
            return Err(BasisError::invalid(format!(
                "determinant has {} spin-orbitals, tables were built for {}",
                det.len(),
                self.n_spin_orbitals
            )));
        }
        Ok(())
    }

    /// Occupied orbitals of `det` in ascending order, one table lookup per byte.
    pub fn occupied(&self, det: &Determinant) -> Result<Vec<usize>> {
        self.check_len(det)?;
        let mut occupied = Vec::with_capacity(det.count_ones());
        for table in &self.tables {
            occupied.extend_from_slice(table.positions(det.byte(table.chunk)));
        }
        Ok(occupied)
    }

    /// Population count of `det` read off the table entry lengths.
    pub fn count_occupied(&self, det: &Determinant) -> Result<usize> {
        self.check_len(det)?;
        Ok(self
            .tables
            .iter()
            .map(|table| table.positions(det.byte(table.chunk)).len())
            .sum())
    }
}
