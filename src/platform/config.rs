// Toolbox - platform/config.rs
//
// Config directory resolution and config.toml loading with validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. A missing file is normal (first run); a broken
// file is reported and ignored so the tools always start.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Default location of config.toml, or `None` if no home directory can be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", constants::APP_ID)?;
    let path = proj_dirs.config_dir().join(constants::CONFIG_FILE_NAME);
    tracing::debug!(path = %path.display(), "Default config path resolved");
    Some(path)
}

// =============================================================================
// config.toml shape
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[assistant]` section.
    pub assistant: AssistantSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Width of the level column.
    pub level_width: Option<usize>,
    /// Width of the count column.
    pub count_width: Option<usize>,
}

/// `[assistant]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    /// Prompt printed before each command.
    pub prompt: Option<String>,
    /// Whether to print the welcome banner.
    pub greeting: Option<bool>,
}

/// Validated configuration shared by both binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    pub level_width: usize,
    pub count_width: usize,
    pub prompt: String,
    pub greeting: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            level_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            count_width: constants::DEFAULT_COUNT_COLUMN_WIDTH,
            prompt: constants::DEFAULT_PROMPT.to_string(),
            greeting: true,
        }
    }
}

/// Load and validate config.toml at `path`.
///
/// Returns the validated config and any non-fatal problems. Each problem
/// leaves the affected value at its default.
pub fn load_config(path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => {
            tracing::info!(path = %path.display(), "Loaded config.toml");
            let config = validate(raw, &mut warnings);
            (config, warnings)
        }
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            });
            (AppConfig::default(), warnings)
        }
    }
}

/// Check each raw field against its allowed range, accumulating problems.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: valid.join(", "),
            });
        }
    }

    let width_range = constants::MIN_COLUMN_WIDTH..=constants::MAX_COLUMN_WIDTH;
    let expected_width = format!(
        "{}-{}",
        constants::MIN_COLUMN_WIDTH,
        constants::MAX_COLUMN_WIDTH
    );

    if let Some(width) = raw.report.level_width {
        if width_range.contains(&width) {
            config.level_width = width;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "report.level_width".to_string(),
                value: width.to_string(),
                expected: expected_width.clone(),
            });
        }
    }

    if let Some(width) = raw.report.count_width {
        if width_range.contains(&width) {
            config.count_width = width;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "report.count_width".to_string(),
                value: width.to_string(),
                expected: expected_width,
            });
        }
    }

    if let Some(prompt) = raw.assistant.prompt {
        config.prompt = prompt;
    }
    if let Some(greeting) = raw.assistant.greeting {
        config.greeting = greeting;
    }

    config
}
