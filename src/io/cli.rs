//! Command-line interface and batch orchestration

use crate::combination::enumerate::{candidate_count, enumerate_candidates};
use crate::combination::requirement::filter_required;
use crate::combination::validity::filter_valid;
use crate::io::configuration::{BatchConfig, DEFAULT_IMAGE_PREFIX, MAX_CATALOG_PIECES};
use crate::io::error::{BatchError, Result};
use crate::io::image::{composite, output_path, save_png};
use crate::io::progress::ProgressManager;
use crate::io::report::AttributeReport;
use crate::pieces::catalog::PieceCatalog;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "nftgen")]
#[command(
    author,
    version,
    about = "Batch-generate layered images from labeled transparent pieces"
)]
/// Command-line arguments for the batch image generator
pub struct Cli {
    /// Name of the input (source) folder in the current directory
    #[arg(short, long)]
    pub input_folder_name: String,

    /// Name of the output folder in the current directory
    #[arg(short, long)]
    pub output_folder_name: String,

    /// Prefix for each generated image
    #[arg(short = 'p', long, default_value = DEFAULT_IMAGE_PREFIX)]
    pub image_prefix: String,

    /// Attributes every generated image must share (case-insensitive)
    #[arg(short, long, num_args = 1..)]
    pub attributes: Vec<String>,

    /// Suppress banner, attribute report and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Largest number of source pieces to enumerate
    #[arg(long, default_value_t = MAX_CATALOG_PIECES)]
    pub max_pieces: usize,
}

impl Cli {
    /// Check if console output should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Counts gathered over one batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Subsets produced by enumeration
    pub candidates: usize,
    /// Subsets whose pieces share no label
    pub valid: usize,
    /// Valid subsets carrying every required label
    pub selected: usize,
    /// Images written to the destination folder
    pub written: usize,
}

/// Runs the load, enumerate, filter and composite pipeline
pub struct BatchProcessor {
    config: BatchConfig,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a processor for a resolved configuration
    pub fn new(config: BatchConfig) -> Self {
        let progress_manager = config.show_progress.then(ProgressManager::new);

        Self {
            config,
            progress_manager,
        }
    }

    /// Configuration this processor runs with
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Generate one image per surviving combination
    ///
    /// Finding no valid combination is not an error; the run simply writes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog cannot be loaded
    /// - The catalog holds more pieces than `max_pieces`
    /// - An output image cannot be written
    pub fn run(&mut self) -> Result<BatchSummary> {
        if self.config.show_progress {
            AttributeReport::from_folder(&self.config.source_dir, &self.config.required)?.print();
        }

        let catalog = PieceCatalog::load(&self.config.source_dir)?;
        let piece_count = catalog.pieces().len();
        if piece_count > self.config.max_pieces {
            return Err(BatchError::CatalogTooLarge {
                pieces: piece_count,
                limit: self.config.max_pieces,
            });
        }
        debug!(
            pieces = piece_count,
            candidates = candidate_count(piece_count),
            "enumerating combinations"
        );

        let mut candidates = 0;
        let valid =
            filter_valid(enumerate_candidates(catalog.pieces()).inspect(|_| candidates += 1));
        let valid_count = valid.len();
        let selected = filter_required(valid, &self.config.required, catalog.vocabulary());

        let mut summary = BatchSummary {
            candidates,
            valid: valid_count,
            selected: selected.len(),
            written: 0,
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(selected.len());
        }

        let background = catalog.background().image();
        for (index, combination) in selected.iter().enumerate() {
            let canvas = composite(background, combination);
            let path = output_path(
                &self.config.destination_dir,
                &self.config.image_prefix,
                index,
            );
            save_png(&canvas, &path)?;
            summary.written += 1;

            if let Some(ref pm) = self.progress_manager {
                pm.advance();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            candidates = summary.candidates,
            valid = summary.valid,
            selected = summary.selected,
            written = summary.written,
            "batch complete"
        );
        Ok(summary)
    }
}
