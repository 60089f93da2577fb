//! Source pieces decoded from the input folder

use crate::combination::bitset::LabelBitset;
use crate::io::configuration::PIECE_EXTENSION;
use crate::io::error::{BatchError, Result, file_system, invalid_parameter};
use crate::pieces::labels::{BACKGROUND_LABEL, extract_labels, is_background};
use crate::pieces::vocabulary::LabelVocabulary;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One decoded source layer and the labels taken from its filename
#[derive(Clone, Debug)]
pub struct Piece {
    name: String,
    labels: Vec<String>,
    label_bits: LabelBitset,
    image: RgbaImage,
}

impl Piece {
    /// Build a piece, interning its filename labels into `vocabulary`
    pub fn new(
        name: impl Into<String>,
        image: RgbaImage,
        vocabulary: &mut LabelVocabulary,
    ) -> Self {
        let name = name.into();
        let labels = extract_labels(&name);
        let label_bits = vocabulary.intern_all(&labels);
        Self {
            name,
            labels,
            label_bits,
            image,
        }
    }

    /// Original filename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Labels in filename order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels as vocabulary indices
    pub const fn label_bits(&self) -> &LabelBitset {
        &self.label_bits
    }

    /// Decoded pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Test whether this piece is the background layer
    pub fn is_background(&self) -> bool {
        self.labels.iter().any(|label| label == BACKGROUND_LABEL)
    }
}

/// The background layer plus every regular piece of one source folder
#[derive(Debug)]
pub struct PieceCatalog {
    background: Piece,
    pieces: Vec<Piece>,
    vocabulary: LabelVocabulary,
}

impl PieceCatalog {
    /// Load every piece image from `folder`
    ///
    /// Files are visited in filename order so output numbering is stable
    /// across runs. Files without the piece extension are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The folder cannot be listed
    /// - No image carries the `BACKGROUND` label, or more than one does
    /// - An image fails to decode
    pub fn load(folder: &Path) -> Result<Self> {
        let files = list_piece_files(folder)?;

        let (backgrounds, regular): (Vec<_>, Vec<_>) = files
            .into_iter()
            .partition(|(name, _)| is_background(name));

        let mut backgrounds = backgrounds.into_iter();
        let (background_name, background_path) = match (backgrounds.next(), backgrounds.next()) {
            (Some(only), None) => only,
            (None, _) => {
                return Err(BatchError::MissingBackground {
                    folder: folder.to_path_buf(),
                });
            }
            (Some(first), Some(second)) => {
                let names = [first, second]
                    .into_iter()
                    .chain(backgrounds)
                    .map(|(name, _)| name)
                    .collect();
                return Err(BatchError::AmbiguousBackground {
                    folder: folder.to_path_buf(),
                    names,
                });
            }
        };

        let mut vocabulary = LabelVocabulary::new();
        let background = Piece::new(
            background_name,
            decode_image(&background_path)?,
            &mut vocabulary,
        );

        let mut pieces = Vec::with_capacity(regular.len());
        for (name, path) in regular {
            let image = decode_image(&path)?;
            let piece = Piece::new(name, image, &mut vocabulary);
            debug!(piece = piece.name(), labels = ?piece.labels(), "loaded piece");
            pieces.push(piece);
        }

        Ok(Self {
            background,
            pieces,
            vocabulary,
        })
    }

    /// Assemble a catalog from already decoded pieces
    ///
    /// # Errors
    ///
    /// Returns an error if `background` does not carry the `BACKGROUND` label
    pub fn from_pieces(
        background: Piece,
        pieces: Vec<Piece>,
        vocabulary: LabelVocabulary,
    ) -> Result<Self> {
        if !background.is_background() {
            return Err(invalid_parameter(
                "background",
                &background.name,
                &"background piece must carry the BACKGROUND label",
            ));
        }
        Ok(Self {
            background,
            pieces,
            vocabulary,
        })
    }

    /// Base layer for every output image
    pub const fn background(&self) -> &Piece {
        &self.background
    }

    /// Regular pieces in filename order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Every label interned while loading
    pub const fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }
}

/// List `(filename, path)` for every piece image in `folder`, sorted by name
///
/// # Errors
///
/// Returns an error if the folder or one of its entries cannot be read
pub fn list_piece_files(folder: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(file_system(folder, "read directory"))? {
        let path = entry.map_err(file_system(folder, "read directory entry"))?.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(PIECE_EXTENSION)
        {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        files.push((name, path));
    }
    files.sort();
    Ok(files)
}

fn decode_image(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|decoded| decoded.to_rgba8())
        .map_err(|source| BatchError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}
