//! Type labels derived from piece filenames
//!
//! A label is a non-empty run of uppercase ASCII letters and hyphens that sits
//! between two underscores, e.g. `HAT-RED` in `piece_HAT-RED_1.png`. Adjacent
//! labels may share the underscore between them (`x_HAT_EYES_y.png`).

use std::collections::BTreeSet;

/// Label identifying the single base layer of every output
pub const BACKGROUND_LABEL: &str = "BACKGROUND";

const LABEL_DELIMITER: char = '_';

fn is_label_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_uppercase() || c == '-')
}

/// Extract every type label from a filename, in order of appearance
///
/// Only segments bounded by an underscore on both sides qualify; the
/// text before the first and after the last underscore never does.
/// The one exception is a bare background file: a name without underscores
/// whose stem is exactly `BACKGROUND` (`BACKGROUND.png`) yields that label.
/// Any other name without underscores, such as `HAT.png`, has no labels.
pub fn extract_labels(filename: &str) -> Vec<String> {
    if !filename.contains(LABEL_DELIMITER) {
        let stem = filename
            .rsplit_once('.')
            .map_or(filename, |(stem, _extension)| stem);
        return if stem == BACKGROUND_LABEL {
            vec![stem.to_string()]
        } else {
            Vec::new()
        };
    }

    let segments: Vec<&str> = filename.split(LABEL_DELIMITER).collect();
    let interior = segments
        .get(1..segments.len().saturating_sub(1))
        .unwrap_or_default();

    interior
        .iter()
        .filter(|segment| is_label_token(segment))
        .map(|segment| (*segment).to_string())
        .collect()
}

/// Test whether a filename marks the background layer
pub fn is_background(filename: &str) -> bool {
    extract_labels(filename)
        .iter()
        .any(|label| label == BACKGROUND_LABEL)
}

/// Labels every generated image must contain
///
/// Tokens are upper-cased on construction so user input is case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredLabels {
    labels: BTreeSet<String>,
}

impl RequiredLabels {
    /// Build a requirement set from raw user tokens
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: tokens
                .into_iter()
                .map(|token| token.as_ref().trim().to_uppercase())
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    /// Test if no label is required
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct required labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Test whether a label is required
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Iterate the required labels in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
