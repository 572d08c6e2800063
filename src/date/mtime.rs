use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use filetime::FileTime;

/// Last-modified time of `path` as local wall-clock time, whole seconds.
pub fn modified_time(path: &Path) -> anyhow::Result<NaiveDateTime> {
    let meta = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    let ft = FileTime::from_last_modification_time(&meta);

    let utc = chrono::DateTime::from_timestamp(ft.unix_seconds(), 0)
        .with_context(|| format!("modification time out of range for {}", path.display()))?;
    Ok(utc.with_timezone(&chrono::Local).naive_local())
}
