use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::Level;

use crate::date;
use crate::naming;
use crate::DiagnosticSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file already carries its canonical name.
    Unchanged,
    /// The file was moved to this path.
    Renamed(PathBuf),
}

/// Rename a JPEG in place to `YYYY-MM-DD-HHmmss-<md5>.jpg`.
/// Capture time comes from EXIF, or the modification time when EXIF is unusable.
pub fn rename_jpeg(path: &Path, sink: &DiagnosticSink<'_>) -> anyhow::Result<RenameOutcome> {
    let resolved = date::resolve_timestamp(path, sink)?;
    sink(
        Level::Debug,
        &format!("{}: {} ({:?})", path.display(), resolved.time, resolved.source),
    );

    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let new_name = naming::canonical_name(&resolved.time, &naming::content_hash(&bytes));

    if path.file_name().is_some_and(|n| n == new_name.as_str()) {
        sink(Level::Info, &format!("No need to rename {}", path.display()));
        return Ok(RenameOutcome::Unchanged);
    }

    let new_path = path.parent().unwrap_or(Path::new("")).join(&new_name);

    sink(Level::Info, &format!("{} => {}", path.display(), new_path.display()));
    fs::rename(path, &new_path).with_context(|| {
        format!("failed to rename {} to {}", path.display(), new_path.display())
    })?;

    Ok(RenameOutcome::Renamed(new_path))
}
