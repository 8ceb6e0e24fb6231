// Toolbox - app/loader.rs
//
// Loads a log file from disk and parses it into entries.
// Failures are returned as `LoadError`; deciding to exit the process is
// left to the binary.

use crate::core::model::LogEntry;
use crate::core::parser;
use crate::platform::fs;
use crate::util::error::LoadError;
use std::path::Path;

/// Read `path` and return every well-formed entry in file order.
///
/// Malformed lines are dropped without warning. A missing file yields
/// `LoadError::NotFound`; any other I/O or encoding failure yields
/// `LoadError::Io`. No partial result is returned on error.
pub fn load_entries(path: &Path) -> Result<Vec<LogEntry>, LoadError> {
    let content = fs::read_text(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let entries = parser::parse_content(&content);

    tracing::info!(
        path = %path.display(),
        lines = content.split(['\r', '\n']).filter(|l| !l.is_empty()).count(),
        entries = entries.len(),
        "Log file loaded"
    );

    Ok(entries)
}
