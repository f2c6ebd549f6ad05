//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the transform loop (which decides which files to resize) and the
//! [`backend`](super::backend) (which does the pixel work), so the backend can
//! be swapped for a mock in tests without changing the loop.

use super::backend::Dimensions;
use std::path::PathBuf;

/// Full specification of one resize: where to read, where to write, how big.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: Dimensions,
}
