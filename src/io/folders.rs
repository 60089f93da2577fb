//! Folder name sanitization and resolution

use crate::io::error::{BatchError, Result, file_system, invalid_parameter};
use crate::pieces::labels::is_background;
use std::path::{Path, PathBuf};
use tracing::info;

/// Turn arbitrary user text into a filesystem-safe name
///
/// Surrounding whitespace is trimmed, inner spaces become underscores, and
/// anything other than alphanumerics, `_`, `-` and `.` is dropped.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

fn resolve(base_dir: &Path, parameter: &'static str, name: &str) -> Result<PathBuf> {
    let sanitized = sanitize_file_name(name);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        return Err(invalid_parameter(
            parameter,
            &name,
            &"folder name must contain at least one filename-safe character",
        ));
    }
    Ok(base_dir.join(sanitized))
}

/// Locate the source folder and check that it holds a background file
///
/// # Errors
///
/// Returns an error if:
/// - The name sanitizes to nothing usable
/// - The folder does not exist
/// - No filename in the folder carries the `BACKGROUND` label
pub fn resolve_source_folder(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = resolve(base_dir, "input-folder-name", name)?;
    if !path.is_dir() {
        return Err(BatchError::SourceFolderMissing { path });
    }

    let mut found_background = false;
    for entry in std::fs::read_dir(&path).map_err(file_system(&path, "read directory"))? {
        let entry = entry.map_err(file_system(&path, "read directory entry"))?;
        if entry.file_name().to_str().is_some_and(is_background) {
            found_background = true;
            break;
        }
    }

    if found_background {
        Ok(path)
    } else {
        Err(BatchError::MissingBackground { folder: path })
    }
}

/// Locate the destination folder, creating it when missing
///
/// # Errors
///
/// Returns an error if the name sanitizes to nothing usable or the folder
/// cannot be created
pub fn prepare_destination_folder(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = resolve(base_dir, "output-folder-name", name)?;
    if !path.is_dir() {
        info!(folder = %path.display(), "creating destination folder");
        std::fs::create_dir_all(&path).map_err(file_system(&path, "create directory"))?;
    }
    Ok(path)
}
