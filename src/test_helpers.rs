//! Shared test utilities for the batch-resize test suite.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let (_tmp, input, output) = setup_dirs();
//! create_test_image(&input.join("a.jpg"), 64, 48);
//! ```

use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding empty `in/` and `out/` directories.
///
/// Keep the returned `TempDir` alive for as long as the paths are used.
pub fn setup_dirs() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    std::fs::create_dir(&input).unwrap();
    std::fs::create_dir(&output).unwrap();
    (tmp, input, output)
}

/// Write a gradient image of the given size, encoded by the path's extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    DynamicImage::ImageRgb8(img).save(path).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_image_has_requested_size() {
        let (_tmp, input, _output) = setup_dirs();
        let path = input.join("check.png");
        create_test_image(&path, 12, 7);
        assert_eq!(image::image_dimensions(&path).unwrap(), (12, 7));
    }
}
