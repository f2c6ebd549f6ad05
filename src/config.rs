//! Run configuration built from the command line.
//!
//! There are no config files: the four positional arguments are the whole
//! configuration. [`ResizeConfig::from_args`] validates them in stages and
//! stops at the first stage that fails:
//!
//! 1. width, then height, must match `^[1-9][0-9]*$` and fit a `u32`
//! 2. both paths must exist (both are checked before giving up)
//! 3. both paths must be directories (both are checked before giving up)
//!
//! Paths are only touched once both numbers are valid.

use crate::imaging::Dimensions;
use crate::validate::validate_integer;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid width value.")]
    InvalidWidth,
    #[error("Invalid height value.")]
    InvalidHeight,
    /// Every path that does not exist, in argument order.
    #[error("{} path(s) do not exist", .0.len())]
    MissingPaths(Vec<PathBuf>),
    /// Every path that exists but is not a directory, in argument order.
    #[error("{} path(s) are not directories", .0.len())]
    NotDirectories(Vec<PathBuf>),
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub size: Dimensions,
}

impl ResizeConfig {
    /// Validate raw arguments into a config.
    ///
    /// `height` and `width` are taken separately because the command line
    /// lists height first; the checks still run width first.
    pub fn from_args(
        height: &str,
        width: &str,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let width = parse_dimension(width).ok_or(ConfigError::InvalidWidth)?;
        let height = parse_dimension(height).ok_or(ConfigError::InvalidHeight)?;

        let missing = failing_paths(&[input_dir, output_dir], |p| p.exists());
        if !missing.is_empty() {
            return Err(ConfigError::MissingPaths(missing));
        }

        let not_dirs = failing_paths(&[input_dir, output_dir], |p| p.is_dir());
        if !not_dirs.is_empty() {
            return Err(ConfigError::NotDirectories(not_dirs));
        }

        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            size: Dimensions { width, height },
        })
    }
}

/// Format check, then numeric range check. Digit strings too large for a
/// `u32` are rejected like any other malformed value.
fn parse_dimension(value: &str) -> Option<u32> {
    if !validate_integer(value) {
        return None;
    }
    value.parse().ok()
}

fn failing_paths(paths: &[&Path], check: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|&&p| !check(p))
        .map(|p| p.to_path_buf())
        .collect()
}
