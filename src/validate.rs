//! Pure string predicates used by argument validation and the directory scan.
//!
//! Both functions work on plain strings and never touch the filesystem, so
//! they can be tested exhaustively without fixtures.

/// File suffixes treated as images. Matching is exact and case-sensitive:
/// `photo.JPG` is not picked up.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Accepts a positive decimal integer written without sign or leading zero.
///
/// Equivalent to matching `^[1-9][0-9]*$`:
/// - `"640"` → true
/// - `"0"`, `"007"` → false (leading zero)
/// - `""`, `"+5"`, `"12px"` → false
pub fn validate_integer(value: &str) -> bool {
    match value.as_bytes() {
        [] | [b'0', ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    }
}

/// Accepts a path whose text after the last `.` is an allowed extension.
///
/// ```text
/// "a.jpg"          → true
/// "archive.tar.gz" → false
/// "photo."         → false (empty suffix)
/// "README"         → false (no dot)
/// ".png"           → true  (hidden file, suffix still matches)
/// ```
pub fn validate_extension(path: &str) -> bool {
    let Some(dot) = path.rfind('.') else {
        return false;
    };
    let extension = &path[dot + 1..];
    !extension.is_empty() && ALLOWED_EXTENSIONS.contains(&extension)
}
