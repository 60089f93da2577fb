//! Label extraction and source piece loading

/// Catalog of decoded source pieces and the background layer
pub mod catalog;
/// Filename label extraction and requirement normalization
pub mod labels;
/// Dense indexing of labels for bitset operations
pub mod vocabulary;
