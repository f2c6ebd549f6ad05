//! # batch-resize
//!
//! Resizes every image directly inside an input directory to a fixed width
//! and height and writes the copies, under the same file names, into an
//! output directory.
//!
//! ```text
//! batch-resize <height> <width> <input_dir> <output_dir>
//! ```
//!
//! Height comes first. The one-line usage printed on a wrong argument count
//! (`args: <new width> <new height> ...`) lists them the other way round; it
//! is kept verbatim for compatibility with existing wrappers.
//!
//! # Pipeline
//!
//! ```text
//! 1. Validate  args     →  ResizeConfig     (numbers, then paths)
//! 2. Scan      input/   →  [a.jpg, c.png]   (immediate entries, allowed extensions)
//! 3. Process   files    →  output/          (decode → resize → encode, per file)
//! 4. Report    summary  →  stdout
//! ```
//!
//! A file that fails to decode or encode is reported and skipped; the rest of
//! the batch still runs. Validation failures are printed to stdout and the
//! process exits 0.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | Integer and extension predicates, the allowed-extension set |
//! | [`config`] | Staged validation of the command line into a [`config::ResizeConfig`] |
//! | [`scan`] | Lists the image files directly inside the input directory |
//! | [`imaging`] | Backend trait, `image`-crate backend, per-file resize operation |
//! | [`process`] | The transform loop with its per-file failure boundary |
//! | [`output`] | Every line printed to stdout |

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
