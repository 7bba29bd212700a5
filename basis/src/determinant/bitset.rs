use crate::error::{BasisError, Result};
use std::fmt;
use std::ops::{BitAnd, BitXor};

const WORD_BITS: usize = u64::BITS as usize;

/// Runtime-sized bit string over spin-orbitals.
///
/// Bits are packed little-endian into `u64` words: orbital `i` lives in word
/// `i / 64` at bit `i % 64`. Bits at positions >= `len` are always zero, so
/// whole-word operations never need masking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Determinant {
    words: Vec<u64>,
    len: usize,
}

impl Determinant {
    /// All-zero determinant over `n_bits` spin-orbitals.
    pub fn new(n_bits: usize) -> Self {
        Self {
            words: vec![0; n_bits.div_ceil(WORD_BITS)],
            len: n_bits,
        }
    }

    /// Determinant with exactly the listed orbitals occupied.
    pub fn from_occupied(n_bits: usize, occupied: &[usize]) -> Result<Self> {
        let mut det = Self::new(n_bits);
        for &orb in occupied {
            det.set(orb, true)?;
        }
        Ok(det)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(BasisError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(BasisError::invalid(format!(
                "determinant lengths differ: {} vs {}",
                self.len, other.len
            )));
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok((self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1)
    }

    pub fn set(&mut self, index: usize, occupied: bool) -> Result<()> {
        self.check_index(index)?;
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if occupied {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        Ok(())
    }

    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index / WORD_BITS] ^= 1u64 << (index % WORD_BITS);
        Ok(())
    }

    /// Number of occupied spin-orbitals.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn zip_words(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        Self {
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(&a, &b)| op(a, b))
                .collect(),
            len: self.len,
        }
    }

    /// Orbitals occupied in both determinants.
    pub fn and(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(self.zip_words(other, |a, b| a & b))
    }

    /// Orbitals occupied in exactly one of the two determinants.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(self.zip_words(other, |a, b| a ^ b))
    }

    /// The `chunk`-th group of eight orbitals as a byte, lowest orbital in
    /// the least significant bit. Chunks past the end read as zero.
    pub fn byte(&self, chunk: usize) -> u8 {
        let bit = chunk * 8;
        match self.words.get(bit / WORD_BITS) {
            Some(word) => (word >> (bit % WORD_BITS)) as u8,
            None => 0,
        }
    }

    /// Iterator over the occupied orbitals in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl BitAnd for &Determinant {
    type Output = Determinant;

    /// # Panics
    ///
    /// Panics if the two determinants have different lengths.
    fn bitand(self, rhs: Self) -> Determinant {
        assert_eq!(self.len, rhs.len, "determinant lengths differ");
        self.zip_words(rhs, |a, b| a & b)
    }
}

impl BitXor for &Determinant {
    type Output = Determinant;

    /// # Panics
    ///
    /// Panics if the two determinants have different lengths.
    fn bitxor(self, rhs: Self) -> Determinant {
        assert_eq!(self.len, rhs.len, "determinant lengths differ");
        self.zip_words(rhs, |a, b| a ^ b)
    }
}

impl fmt::Display for Determinant {
    /// Highest orbital first, matching the usual bit string reading order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            let bit = (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1;
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

pub struct Ones<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let trailing = self.current.trailing_zeros() as usize;
                // clear lowest set bit
                self.current &= self.current - 1;
                return Some(self.word_idx * WORD_BITS + trailing);
            }
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
    }
}
