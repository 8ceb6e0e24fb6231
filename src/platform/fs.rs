// Toolbox - platform/fs.rs
//
// Filesystem helpers used by the app layer.

use std::io;
use std::path::Path;

/// Read the full content of a file as UTF-8 text.
///
/// Invalid UTF-8 is reported as `io::ErrorKind::InvalidData` rather than
/// replaced, so a binary file is surfaced as a read error.
pub fn read_text(path: &Path) -> io::Result<String> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "File read");
    Ok(text)
}

/// Create (or truncate) a file for writing, buffered.
pub fn create_buffered(path: &Path) -> io::Result<io::BufWriter<std::fs::File>> {
    let file = std::fs::File::create(path)?;
    Ok(io::BufWriter::new(file))
}
