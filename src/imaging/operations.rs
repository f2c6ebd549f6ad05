//! High-level image operations.
//!
//! These functions combine path planning with backend execution: they take a
//! source file and a target size, compute the parameters, and drive the
//! backend through decode, resize and encode.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan a resize without executing it.
///
/// The output keeps the source's file name, extension included, and lands
/// directly inside `output_dir`. A source without a file name (`..`, `/`)
/// maps to `output_dir` itself, which the encoder will then refuse.
pub fn plan_resize(source: &Path, output_dir: &Path, size: Dimensions) -> ResizeParams {
    let output = match source.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.to_path_buf(),
    };
    ResizeParams {
        source: source.to_path_buf(),
        output,
        size,
    }
}

/// Decode, resize and encode a single file.
///
/// The decoded image lives only for the duration of this call.
pub fn resize_file<B: ImageBackend>(backend: &B, params: &ResizeParams) -> Result<()> {
    let mut image = backend.decode(&params.source)?;
    backend.resize(&mut image, params.size)?;
    backend.encode(&image, &params.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use std::path::PathBuf;

    const SIZE: Dimensions = Dimensions {
        width: 200,
        height: 100,
    };

    #[test]
    fn plan_resize_keeps_file_name() {
        let params = plan_resize(Path::new("/in/photo.jpeg"), Path::new("/out"), SIZE);

        assert_eq!(params.source, PathBuf::from("/in/photo.jpeg"));
        assert_eq!(params.output, PathBuf::from("/out/photo.jpeg"));
        assert_eq!(params.size, SIZE);
    }

    #[test]
    fn plan_resize_keeps_extension_case_and_dots() {
        let params = plan_resize(Path::new("in/holiday.2024.png"), Path::new("out"), SIZE);
        assert_eq!(params.output, PathBuf::from("out/holiday.2024.png"));
    }

    #[test]
    fn plan_resize_joins_relative_output_dir() {
        let params = plan_resize(Path::new("./in/a.gif"), Path::new("./out/"), SIZE);
        assert_eq!(params.output, Path::new("./out/").join("a.gif"));
    }

    #[test]
    fn resize_file_runs_decode_resize_encode_in_order() {
        let backend = MockBackend::new();
        let params = plan_resize(Path::new("/in/a.jpg"), Path::new("/out"), SIZE);

        resize_file(&backend, &params).unwrap();

        assert_eq!(
            backend.get_operations(),
            vec![
                RecordedOp::Decode("/in/a.jpg".to_string()),
                RecordedOp::Resize {
                    source: "/in/a.jpg".to_string(),
                    width: 200,
                    height: 100,
                },
                RecordedOp::Encode {
                    source: "/in/a.jpg".to_string(),
                    output: "/out/a.jpg".to_string(),
                },
            ]
        );
    }

    #[test]
    fn resize_file_stops_after_failed_decode() {
        let backend = MockBackend::failing_decode(&["a.jpg"]);
        let params = plan_resize(Path::new("/in/a.jpg"), Path::new("/out"), SIZE);

        let result = resize_file(&backend, &params);

        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::Decode("/in/a.jpg".to_string())]
        );
    }

    #[test]
    fn resize_file_reports_failed_encode() {
        let backend = MockBackend::failing_encode(&["a.jpg"]);
        let params = plan_resize(Path::new("/in/a.jpg"), Path::new("/out"), SIZE);

        let result = resize_file(&backend, &params);

        assert!(matches!(result, Err(BackendError::Io(_))));
        assert_eq!(backend.get_operations().len(), 3);
    }
}
