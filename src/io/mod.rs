//! Command line, configuration, compositing and console output

/// Command-line parsing and the batch pipeline driver
pub mod cli;
/// Constants and the resolved run configuration
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Folder name sanitization and resolution
pub mod folders;
/// Layer compositing and PNG export
pub mod image;
/// Progress bar for the generation loop
pub mod progress;
/// Startup banner and attribute frequency report
pub mod report;
