//! Input directory scanning.
//!
//! Only the immediate entries of the input directory are considered:
//!
//! ```text
//! input/
//! ├── a.jpg          # picked up
//! ├── b.PNG          # skipped, extensions are case-sensitive
//! ├── notes.txt      # skipped
//! └── sub/           # skipped, never descended into
//!     └── c.png
//! ```
//!
//! Directories are detected through symlinks. Anything else with an allowed
//! extension is returned, even if it later turns out not to be a decodable
//! image; that is the transform loop's problem.

use crate::validate::validate_extension;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// List the image files directly inside `input_dir`, sorted by path.
pub fn scan(input_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();

    images.sort();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    if path.is_dir() {
        return false;
    }
    path.file_name()
        .map(|name| validate_extension(&name.to_string_lossy()))
        .unwrap_or(false)
}
