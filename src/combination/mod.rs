//! Candidate enumeration and combination filtering

use crate::pieces::catalog::Piece;

/// Growable label bitset used for collision and requirement checks
pub mod bitset;
/// Subset enumeration over the regular pieces
pub mod enumerate;
/// Rejection of combinations missing a required label
pub mod requirement;
/// Rejection of combinations whose pieces share a label
pub mod validity;

/// Pieces destined for one output image, in catalog order
pub type Combination<'a> = Vec<&'a Piece>;
