//! Error types for catalog loading, folder resolution and image output

use std::path::PathBuf;

/// Main error type for all batch operations
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The requested source folder does not exist or is not a directory
    #[error("There is not a folder called '{}'", path.display())]
    SourceFolderMissing {
        /// Resolved path of the missing folder
        path: PathBuf,
    },

    /// No file in the source folder carries the `BACKGROUND` label
    #[error("There is no explicitly typed BACKGROUND image in '{}'", folder.display())]
    MissingBackground {
        /// Folder that was searched
        folder: PathBuf,
    },

    /// More than one image in the source folder carries the `BACKGROUND` label
    #[error("Found {} BACKGROUND images in '{}': {}", names.len(), folder.display(), names.join(", "))]
    AmbiguousBackground {
        /// Folder that was searched
        folder: PathBuf,
        /// Filenames of every background candidate
        names: Vec<String>,
    },

    /// Too many regular pieces for exhaustive enumeration
    ///
    /// Candidate count grows as `2^pieces`, so the run is refused up front
    /// instead of stalling.
    #[error("{pieces} source pieces exceed the enumeration limit of {limit} (raise it with --max-pieces)")]
    CatalogTooLarge {
        /// Number of regular pieces in the catalog
        pieces: usize,
        /// Configured ceiling
        limit: usize,
    },

    /// Failed to decode a source image
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write a generated image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A user supplied value failed validation
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// Convenience type alias for batch results
pub type Result<T> = std::result::Result<T, BatchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BatchError {
    BatchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it came from
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> BatchError {
    let path = path.into();
    move |source| BatchError::FileSystem {
        path,
        operation,
        source,
    }
}
