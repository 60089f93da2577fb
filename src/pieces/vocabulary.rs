//! Dense label indexing so label sets can be held as bitsets

use crate::combination::bitset::LabelBitset;
use crate::pieces::labels::RequiredLabels;
use std::collections::HashMap;

/// Maps every label seen during a run to a stable index
///
/// Indices are handed out in first-seen order and never reused, so a bitset
/// built early stays meaningful as more labels arrive.
#[derive(Clone, Debug, Default)]
pub struct LabelVocabulary {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl LabelVocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `label`, assigning the next free one if unseen
    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(&index) = self.positions.get(label) {
            return index;
        }
        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.positions.insert(label.to_string(), index);
        index
    }

    /// Intern a whole label sequence and return its bitset
    pub fn intern_all(&mut self, labels: &[String]) -> LabelBitset {
        let mut bits = LabelBitset::new();
        for label in labels {
            bits.insert(self.intern(label));
        }
        bits
    }

    /// Look up the index of a known label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Look up the label stored at `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of distinct labels
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Test if no label has been interned
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Translate a requirement set into a bitset
    ///
    /// Returns `None` when some required label was never interned, meaning no
    /// combination of the catalog can satisfy the requirement.
    pub fn resolve(&self, required: &RequiredLabels) -> Option<LabelBitset> {
        required
            .iter()
            .map(|label| self.position(label))
            .collect::<Option<Vec<_>>>()
            .map(LabelBitset::from_indices)
    }
}
