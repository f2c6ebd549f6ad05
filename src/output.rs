//! CLI output formatting.
//!
//! Every line the program prints comes from this module. All output goes to
//! stdout, errors included, and the exact wording is part of the contract:
//!
//! ```text
//! args: <new width> <new height> <input path> <output path>
//! Invalid width value.
//! Invalid height value.
//! Path "missing" does not exist.
//! Path "file.txt is not a directory.
//! Resizing images.
//! Failed to resize "in/broken.jpg": Processing failed: ...
//! Done resizing 3 images to size 200x100.
//! Failed to resize 1 images.
//! ```
//!
//! The "is not a directory" line has no closing quote after the path. Scripts
//! parsing the output depend on it, so it stays.
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and, where `main` needs one, a `print_*` wrapper that
//! writes to stdout. Format functions are pure: no I/O, no side effects.

use crate::config::ConfigError;
use crate::imaging::Dimensions;
use crate::process::{ProcessEvent, ProcessSummary};
use std::path::Path;

pub const USAGE: &str = "args: <new width> <new height> <input path> <output path>";

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Validation
// ============================================================================

pub fn print_usage() {
    println!("{}", USAGE);
}

fn path_not_found(path: &Path) -> String {
    format!("Path \"{}\" does not exist.", path.display())
}

fn path_not_dir(path: &Path) -> String {
    format!("Path \"{} is not a directory.", path.display())
}

/// Format a validation failure as the lines shown to the user.
///
/// Path errors produce one line per offending path, in argument order.
pub fn format_config_error(error: &ConfigError) -> Vec<String> {
    match error {
        ConfigError::InvalidWidth | ConfigError::InvalidHeight => vec![error.to_string()],
        ConfigError::MissingPaths(paths) => paths.iter().map(|p| path_not_found(p)).collect(),
        ConfigError::NotDirectories(paths) => paths.iter().map(|p| path_not_dir(p)).collect(),
    }
}

pub fn print_config_error(error: &ConfigError) {
    print_lines(&format_config_error(error));
}

// ============================================================================
// Transform loop
// ============================================================================

pub fn print_started() {
    println!("Resizing images.");
}

/// Format a single per-file event as display lines.
///
/// Successful files print nothing; only failures are worth a line.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Resized { .. } => Vec::new(),
        ProcessEvent::Failed { source, reason } => {
            vec![format!("Failed to resize \"{}\": {}", source.display(), reason)]
        }
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    print_lines(&format_process_event(event));
}

/// Format the closing report.
///
/// The first line counts only files that were written. A second line appears
/// when some files failed.
pub fn format_summary(summary: &ProcessSummary, size: Dimensions) -> Vec<String> {
    let mut lines = vec![format!(
        "Done resizing {} images to size {}x{}.",
        summary.resized, size.width, size.height
    )];
    if summary.failed > 0 {
        lines.push(format!("Failed to resize {} images.", summary.failed));
    }
    lines
}

pub fn print_summary(summary: &ProcessSummary, size: Dimensions) {
    print_lines(&format_summary(summary, size));
}
