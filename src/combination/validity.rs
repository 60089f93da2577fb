//! Label-collision filter
//!
//! Pieces of a candidate are visited in order while a bitset accumulates the
//! labels claimed so far. The first piece reusing a claimed label rejects the
//! whole candidate. A piece with no labels never collides.
//!
//! Only collisions between different pieces count: a piece whose own filename
//! repeats a label (`x_HAT_HAT_y.png`) is accepted on its own.

use crate::combination::Combination;
use crate::combination::bitset::LabelBitset;
use crate::pieces::catalog::Piece;

/// Test whether no two pieces of `combination` share a label
pub fn is_valid(combination: &[&Piece]) -> bool {
    let mut claimed = LabelBitset::new();
    for piece in combination {
        if piece.label_bits().intersects(&claimed) {
            return false;
        }
        claimed.union_with(piece.label_bits());
    }
    true
}

/// Keep only the collision-free candidates, preserving order
pub fn filter_valid<'a, I>(candidates: I) -> Vec<Combination<'a>>
where
    I: IntoIterator<Item = Combination<'a>>,
{
    candidates
        .into_iter()
        .filter(|candidate| is_valid(candidate))
        .collect()
}
