use bitvec::prelude::*;
use std::fmt;

/// Growable bitset over label indices handed out by a `LabelVocabulary`
///
/// Uses 0-based indexing. Bitsets of different lengths combine freely:
/// bits beyond a set's current length read as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelBitset {
    bits: BitVec,
}

impl LabelBitset {
    /// Create a bitset with no labels present
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
        }
    }

    /// Create a bitset holding the given label indices
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new();
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Insert a label index, growing the set as needed
    pub fn insert(&mut self, index: usize) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, true);
    }

    /// Test label membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test whether any label is present in both sets
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits.iter_ones().any(|index| other.contains(index))
    }

    /// Add every label of `other` to this set
    pub fn union_with(&mut self, other: &Self) {
        if other.bits.len() > self.bits.len() {
            self.bits.resize(other.bits.len(), false);
        }
        for index in other.bits.iter_ones() {
            self.bits.set(index, true);
        }
    }

    /// Test whether every label of `other` is present here
    pub fn is_superset(&self, other: &Self) -> bool {
        other.bits.iter_ones().all(|index| self.contains(index))
    }

    /// Test if no labels are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count labels in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all label indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for LabelBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelBitset({} labels: {:?})", self.count(), self.to_vec())
    }
}
