//! Batch generation of layered composite images from labeled transparent pieces
//!
//! Every piece in a source folder carries type labels taken from its filename.
//! The crate enumerates the combinations of pieces that share no label, keeps the
//! ones containing every required label, and paints each survivor onto a copy of
//! the background piece.

#![forbid(unsafe_code)]

/// Candidate enumeration and the label-collision and requirement filters
pub mod combination;
/// Command line, configuration, compositing and console output
pub mod io;
/// Label extraction and the source piece catalog
pub mod pieces;

pub use io::error::{BatchError, Result};
