use std::path::Path;

const JPEG_SUFFIX: &[u8] = b".jpg";

/// Outcome of checking a single command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVerdict {
    Accept,
    WrongType,
    NotFound,
}

/// True when the name ends in `.jpg`, ignoring case. Strict suffix match only.
pub fn is_jpeg_name(path: &Path) -> bool {
    let name = path.to_string_lossy();
    let bytes = name.as_bytes();
    bytes.len() >= JPEG_SUFFIX.len()
        && bytes[bytes.len() - JPEG_SUFFIX.len()..].eq_ignore_ascii_case(JPEG_SUFFIX)
}

/// Suffix first, then existence. Only a definite "not found" skips; other
/// stat errors are left for the renamer to report.
pub fn check(path: &Path) -> ScanVerdict {
    if !is_jpeg_name(path) {
        return ScanVerdict::WrongType;
    }
    match path.try_exists() {
        Ok(false) => ScanVerdict::NotFound,
        _ => ScanVerdict::Accept,
    }
}
