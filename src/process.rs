//! The transform loop.
//!
//! Takes a validated [`ResizeConfig`], scans the input directory, and runs
//! decode → resize → encode for every image found, one file at a time.
//!
//! ## Failure Boundary
//!
//! Each file is isolated: if decoding, resizing or encoding fails, a
//! [`ProcessEvent::Failed`] is emitted and the loop moves on. Only a failure
//! to list the input directory aborts the run. The returned
//! [`ProcessSummary`] keeps successes and failures apart so the final report
//! is accurate.
//!
//! ## Events
//!
//! Progress is reported through a caller-supplied callback rather than
//! printed directly, which keeps this module free of output formatting
//! (see [`crate::output::format_process_event`]).

use crate::config::ResizeConfig;
use crate::imaging::{ImageBackend, RustBackend, plan_resize, resize_file};
use crate::scan::{self, ScanError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
}

/// Outcome of one file, reported as soon as it is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Resized { source: PathBuf, output: PathBuf },
    Failed { source: PathBuf, reason: String },
}

/// Counts for the final report. Every scanned file lands in exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub resized: usize,
    pub failed: usize,
}

pub fn process(
    config: &ResizeConfig,
    on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessSummary, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, config, on_event)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend<B: ImageBackend>(
    backend: &B,
    config: &ResizeConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessSummary, ProcessError> {
    let sources = scan::scan(&config.input_dir)?;
    let mut summary = ProcessSummary::default();

    for source in sources {
        let params = plan_resize(&source, &config.output_dir, config.size);

        let event = match resize_file(backend, &params) {
            Ok(()) => {
                summary.resized += 1;
                ProcessEvent::Resized {
                    source: params.source,
                    output: params.output,
                }
            }
            Err(e) => {
                summary.failed += 1;
                ProcessEvent::Failed {
                    source: params.source,
                    reason: e.to_string(),
                }
            }
        };
        on_event(&event);
    }

    Ok(summary)
}
