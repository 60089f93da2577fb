//! Batch constants and the immutable run configuration

use crate::io::cli::Cli;
use crate::io::error::{Result, invalid_parameter};
use crate::io::folders::{prepare_destination_folder, resolve_source_folder, sanitize_file_name};
use crate::pieces::labels::RequiredLabels;
use std::path::{Path, PathBuf};

/// Prefix for generated filenames when none is given
pub const DEFAULT_IMAGE_PREFIX: &str = "img";

/// Extension of source files treated as pieces
pub const PIECE_EXTENSION: &str = "png";
/// Extension of generated images
pub const OUTPUT_EXTENSION: &str = "png";

// 2^20 candidates is about a million subsets to check
/// Largest regular-piece count enumerated without an explicit override
pub const MAX_CATALOG_PIECES: usize = 20;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Message shown next to the progress bar
pub const PROGRESS_MESSAGE: &str = "Generating images";

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Everything a batch run needs, resolved once from the command line
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Folder holding the background and piece images
    pub source_dir: PathBuf,
    /// Folder receiving generated images
    pub destination_dir: PathBuf,
    /// Filename prefix for generated images
    pub image_prefix: String,
    /// Labels every generated image must contain
    pub required: RequiredLabels,
    /// Ceiling on regular pieces before enumeration is refused
    pub max_pieces: usize,
    /// Print the attribute report and progress bar
    pub show_progress: bool,
}

impl BatchConfig {
    /// Resolve folders relative to `base_dir` and normalize user input
    ///
    /// The source folder is checked before the destination folder is created,
    /// so a bad source leaves the filesystem untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source folder does not exist or holds no `BACKGROUND` file
    /// - The destination folder cannot be created
    /// - The image prefix sanitizes to an empty string
    pub fn from_cli(cli: &Cli, base_dir: &Path) -> Result<Self> {
        let source_dir = resolve_source_folder(base_dir, &cli.input_folder_name)?;
        let image_prefix = sanitize_file_name(&cli.image_prefix);
        if image_prefix.is_empty() {
            return Err(invalid_parameter(
                "image-prefix",
                &cli.image_prefix,
                &"prefix must contain at least one filename-safe character",
            ));
        }
        let destination_dir = prepare_destination_folder(base_dir, &cli.output_folder_name)?;

        Ok(Self {
            source_dir,
            destination_dir,
            image_prefix,
            required: RequiredLabels::from_tokens(&cli.attributes),
            max_pieces: cli.max_pieces,
            show_progress: cli.should_show_progress(),
        })
    }
}
