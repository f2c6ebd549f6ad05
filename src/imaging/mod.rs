//! Image processing on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` with content sniffing |
//! | **Resize** | `resize_exact`, bilinear, aspect ratio ignored |
//! | **Encode** | `DynamicImage::write_to`, format from extension |
//!
//! The module is split into:
//! - **Parameters**: [`ResizeParams`], what a single resize should do
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: planning output paths and driving the backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{plan_resize, resize_file};
pub use params::ResizeParams;
pub use rust_backend::RustBackend;
