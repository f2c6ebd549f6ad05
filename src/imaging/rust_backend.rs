//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, BMP, GIF, TIFF) | `image::ImageReader`, format sniffed from content |
//! | Resize | `DynamicImage::resize_exact` with the `Triangle` (bilinear) filter |
//! | Encode | `DynamicImage::write_to`, format chosen by output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Resampling filter for every resize. Not configurable.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// JPEG has no alpha channel; the encoder rejects RGBA input outright.
fn prepare_for_format(image: &DynamicImage, format: ImageFormat) -> Option<DynamicImage> {
    if format == ImageFormat::Jpeg && image.color().has_alpha() {
        Some(DynamicImage::ImageRgb8(image.to_rgb8()))
    } else {
        None
    }
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    fn resize(&self, image: &mut DynamicImage, size: Dimensions) -> Result<(), BackendError> {
        if size.width == 0 || size.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot resize to {}x{}",
                size.width, size.height
            )));
        }
        *image = image.resize_exact(size.width, size.height, RESIZE_FILTER);
        Ok(())
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let format = ImageFormat::from_path(path)
            .map_err(|_| BackendError::UnsupportedFormat(path.to_path_buf()))?;
        if !format.writing_enabled() {
            return Err(BackendError::UnsupportedFormat(path.to_path_buf()));
        }

        let converted = prepare_for_format(image, format);
        let image = converted.as_ref().unwrap_or(image);

        // Encode fully in memory first; the destination is only touched once
        // the encoder has succeeded. TIFF needs a seekable sink.
        let mut encoded = Cursor::new(Vec::new());
        image.write_to(&mut encoded, format).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        })?;
        fs::write(path, encoded.into_inner()).map_err(BackendError::Io)
    }
}
