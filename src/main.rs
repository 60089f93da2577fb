//! CLI entry point for batch composite image generation

use clap::Parser;
use nftgen::io::cli::{BatchProcessor, Cli};
use nftgen::io::configuration::{BatchConfig, DEFAULT_LOG_FILTER};
use nftgen::io::error::file_system;
use nftgen::io::report::print_banner;
use tracing_subscriber::EnvFilter;

fn main() -> nftgen::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.should_show_progress() {
        print_banner();
    }

    let base_dir =
        std::env::current_dir().map_err(file_system(".", "resolve working directory"))?;
    let config = BatchConfig::from_cli(&cli, &base_dir)?;
    let mut processor = BatchProcessor::new(config);
    processor.run()?;
    Ok(())
}
