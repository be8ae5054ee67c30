use bitvec::prelude::*;
use std::fmt;

/// Fixed-length bitset marking edge pixels along one tile border
///
/// Bit `i` is the `i`-th pixel of the border, counted from the top or left.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderBitset {
    bits: BitVec,
}

impl BorderBitset {
    /// Create a bitset of `len` cleared bits
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Set bit `index`, ignored beyond the border length
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test bit `index`
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Border length in pixels
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the border has no pixels
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of positions where the two bitsets differ
    ///
    /// The shorter bitset is treated as padded with cleared bits.
    pub fn xor_count(&self, other: &Self) -> usize {
        let (longer, shorter) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let common = longer
            .bits
            .iter()
            .by_vals()
            .zip(shorter.bits.iter().by_vals())
            .filter(|(a, b)| a != b)
            .count();
        let tail = longer
            .bits
            .get(shorter.len()..)
            .map_or(0, BitSlice::count_ones);
        common + tail
    }

    /// Indices of all set bits
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for BorderBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BorderBitset({} of {}: {:?})", self.count(), self.len(), self.to_vec())
    }
}
