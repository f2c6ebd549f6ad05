//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the transform loop and the
//! pixel work. It exposes the three operations every backend must support:
//! decode, resize and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock so the loop can be exercised without
//! real codecs.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Target size of a resize, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// `Image` is whatever in-memory bitmap the backend works with. It is created
/// by [`decode`](Self::decode), resized in place and handed to
/// [`encode`](Self::encode); nothing is shared between files.
pub trait ImageBackend {
    type Image;

    /// Read and decode the file at `path`.
    fn decode(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Stretch `image` to exactly `size`, ignoring the aspect ratio.
    fn resize(&self, image: &mut Self::Image, size: Dimensions) -> Result<(), BackendError>;

    /// Encode `image` to `path`, choosing the format from the extension.
    fn encode(&self, image: &Self::Image, path: &Path) -> Result<(), BackendError>;
}
