use std::path::PathBuf;

use log::Level;

use crate::rename::{self, RenameOutcome};
use crate::scan::{self, ScanVerdict};
use crate::DiagnosticSink;

/// Per-invocation counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// Files renamed or already canonical.
    pub processed: u64,
    /// Arguments rejected by the scanner.
    pub skipped: u64,
    /// Accepted files whose rename failed.
    pub failed: u64,
    /// New paths of files that were moved.
    pub renamed: Vec<PathBuf>,
}

/// Process every argument in order. Per-file failures are reported through
/// `sink` and never stop the batch.
pub fn process(paths: &[PathBuf], sink: &DiagnosticSink<'_>) -> ProcessResult {
    let mut result = ProcessResult::default();

    for (i, path) in paths.iter().enumerate() {
        sink(Level::Info, &format!("ARGV[{}] = {}", i, path.display()));

        match scan::check(path) {
            ScanVerdict::WrongType => {
                sink(
                    Level::Warn,
                    &format!("Skipped unexpected input file type: {}", path.display()),
                );
                result.skipped += 1;
                continue;
            }
            ScanVerdict::NotFound => {
                sink(Level::Warn, &format!("Input file not found: {}", path.display()));
                result.skipped += 1;
                continue;
            }
            ScanVerdict::Accept => {}
        }

        match rename::rename_jpeg(path, sink) {
            Ok(RenameOutcome::Renamed(new_path)) => result.renamed.push(new_path),
            Ok(RenameOutcome::Unchanged) => {}
            Err(e) => {
                sink(Level::Error, &format!("{:#}", e));
                result.failed += 1;
                continue;
            }
        }

        result.processed += 1;
    }

    if result.processed > 0 {
        sink(
            Level::Info,
            &format!("{} file(s) are successfully processed.", result.processed),
        );
    }

    result
}
