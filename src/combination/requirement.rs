//! Required-label filter

use crate::combination::Combination;
use crate::combination::bitset::LabelBitset;
use crate::pieces::catalog::Piece;
use crate::pieces::labels::RequiredLabels;
use crate::pieces::vocabulary::LabelVocabulary;
use tracing::debug;

/// Union of every member's labels
pub fn combined_labels(combination: &[&Piece]) -> LabelBitset {
    let mut union = LabelBitset::new();
    for piece in combination {
        union.union_with(piece.label_bits());
    }
    union
}

/// Test whether `combination` carries every label in `required`
pub fn satisfies(combination: &[&Piece], required: &LabelBitset) -> bool {
    combined_labels(combination).is_superset(required)
}

/// Keep the combinations containing every required label, preserving order
///
/// An empty requirement keeps everything. A required label that no piece
/// carries keeps nothing.
pub fn filter_required<'a>(
    combinations: Vec<Combination<'a>>,
    required: &RequiredLabels,
    vocabulary: &LabelVocabulary,
) -> Vec<Combination<'a>> {
    if required.is_empty() {
        return combinations;
    }

    let Some(required_bits) = vocabulary.resolve(required) else {
        debug!(
            required = ?required.iter().collect::<Vec<_>>(),
            "required label absent from every piece"
        );
        return Vec::new();
    };

    combinations
        .into_iter()
        .filter(|combination| satisfies(combination, &required_bits))
        .collect()
}
