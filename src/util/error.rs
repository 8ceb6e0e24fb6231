// Toolbox - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant keeps its underlying cause reachable through `source()`
// so diagnostic logging can print the full chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Toolbox operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ToolboxError {
    /// Reading a log file failed.
    Load(LoadError),

    /// Writing an export file failed.
    Export(ExportError),

    /// Writing user-facing output failed.
    Io {
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ToolboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io { operation, source } => write!(f, "I/O error during {operation}: {source}"),
        }
    }
}

impl std::error::Error for ToolboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Fatal errors while reading a log file. Malformed lines are not errors;
/// they are dropped by the parser.
#[derive(Debug)]
pub enum LoadError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// Any other I/O failure while opening or reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Log file '{}' does not exist", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<LoadError> for ToolboxError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ToolboxError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading config.toml. Never fatal: each one is
/// logged and the affected value keeps its default.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Recoverable validation failures of assistant commands.
///
/// The `Display` text is exactly what the user sees; the REPL prints it and
/// keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `add`/`change` did not receive exactly a name and a phone.
    WrongArgCount,

    /// `phone` did not receive exactly one name.
    MissingName,

    /// The phone is not all digits with an optional leading `+`.
    InvalidPhone { phone: String },

    /// The named contact is not in the store.
    NotFound { name: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgCount => f.write_str("Give me name and phone please."),
            Self::MissingName => f.write_str("Enter correct user name."),
            Self::InvalidPhone { .. } => {
                f.write_str("Invalid phone number. Use only digits, optionally starting with +.")
            }
            Self::NotFound { .. } => f.write_str("Contact not found."),
        }
    }
}

impl std::error::Error for CommandError {}

/// Convenience type alias for Toolbox results.
pub type Result<T> = std::result::Result<T, ToolboxError>;
