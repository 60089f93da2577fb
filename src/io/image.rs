//! Compositing of piece layers onto the background and PNG export

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{BatchError, Result};
use crate::pieces::catalog::Piece;
use image::{RgbaImage, imageops};
use std::path::{Path, PathBuf};

/// Paint every piece onto a fresh copy of `background`
///
/// Pieces are alpha-blended at the top-left corner in the given order, so
/// later pieces cover earlier ones. Pieces larger than the background are
/// clipped to its bounds.
pub fn composite(background: &RgbaImage, pieces: &[&Piece]) -> RgbaImage {
    let mut canvas = background.clone();
    for piece in pieces {
        imageops::overlay(&mut canvas, piece.image(), 0, 0);
    }
    canvas
}

/// Path of the generated image at `index` (`<dir>/<prefix>_<index>.png`)
pub fn output_path(destination_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    destination_dir.join(format!("{prefix}_{index}.{OUTPUT_EXTENSION}"))
}

/// Write `canvas` as PNG, replacing any existing file
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| BatchError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
