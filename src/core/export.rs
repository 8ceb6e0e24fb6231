// Toolbox - core/export.rs
//
// CSV and JSON export of log entries.
// Core layer: writes to any Write trait object.

use crate::core::model::LogEntry;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format for an export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick a format from the file extension: `.json` is JSON, anything
    /// else CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export entries to CSV.
///
/// Writes: date, time, level, message
pub fn export_csv<W: Write>(
    entries: &[&LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "time", "level", "message"])
        .map_err(csv_err)?;

    for entry in entries {
        csv_writer
            .write_record([&entry.date, &entry.time, &entry.level, &entry.message])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(entries.len())
}

/// Export entries to JSON (array of objects).
pub fn export_json<W: Write>(
    entries: &[&LogEntry],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.len())
}

/// Export entries in the given format.
pub fn export<W: Write>(
    entries: &[&LogEntry],
    writer: W,
    export_path: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(entries, writer, export_path),
        ExportFormat::Json => export_json(entries, writer, export_path),
    }
}
