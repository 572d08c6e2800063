pub mod exif;
pub mod mtime;

use std::path::Path;

use chrono::NaiveDateTime;
use log::Level;

use crate::DiagnosticSink;

/// Where a resolved timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    Exif,
    Modified,
}

/// Result of timestamp resolution: time + source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTime {
    pub time: NaiveDateTime,
    pub source: TimeSource,
}

/// Resolve the capture time of `path`, falling back to the filesystem
/// modification time when no usable EXIF date exists.
pub fn resolve_timestamp(path: &Path, sink: &DiagnosticSink<'_>) -> anyhow::Result<ResolvedTime> {
    // 1. EXIF
    if let Some(time) = exif::read_capture_time(path) {
        return Ok(ResolvedTime { time, source: TimeSource::Exif });
    }

    // 2. Physical timestamp
    sink(
        Level::Warn,
        "Failed to get timestamp from EXIF. Try to use physical time stamp instead...",
    );
    let time = mtime::modified_time(path)?;
    Ok(ResolvedTime { time, source: TimeSource::Modified })
}
