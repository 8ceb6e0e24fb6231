// Toolbox - bin/logsum.rs
//
// Log summariser entry point. Handles:
// 1. CLI argument parsing
// 2. Config and logging initialisation
// 3. Loading and parsing the log file
// 4. Printing level counts, optional level details, optional export

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toolbox::app::loader;
use toolbox::core::export::{self, ExportFormat};
use toolbox::core::model::LogEntry;
use toolbox::core::report::{self, TableLayout};
use toolbox::core::summary;
use toolbox::platform::{config, fs};
use toolbox::util::constants;
use toolbox::util::error::{ExportError, LoadError, Result, ToolboxError};
use toolbox::util::logging;

/// Summarise a log file by severity level.
///
/// Each line is expected as `<date> <time> <level> <message...>`; other
/// lines are skipped.
#[derive(Parser, Debug)]
#[command(name = "logsum", version, about)]
struct Cli {
    /// Log file to summarise.
    path: PathBuf,

    /// Also list entries of this level (case-insensitive).
    level: Option<String>,

    /// Write the listed entries (or all entries without LEVEL) to this file.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Export format (default: from the export file extension).
    #[arg(long = "export-format", value_enum)]
    export_format: Option<ExportFormat>,

    /// Config file (default: platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success; real usage errors
            // exit 1 like every other failure of this tool.
            let _ = e.print();
            if e.use_stderr() {
                println!("{}", constants::MSG_LOGSUM_USAGE);
                std::process::exit(1);
            }
            std::process::exit(0);
        }
    };

    let (app_config, config_warnings) = match cli.config.clone().or_else(config::default_config_path)
    {
        Some(path) => config::load_config(&path),
        None => (config::AppConfig::default(), Vec::new()),
    };

    logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using default");
    }

    tracing::info!(
        version = constants::APP_VERSION,
        path = %cli.path.display(),
        level = cli.level.as_deref(),
        "logsum starting"
    );

    let layout = TableLayout {
        level_width: app_config.level_width,
        count_width: app_config.count_width,
    };

    if let Err(e) = run(&cli, layout) {
        tracing::error!(error = %e, "logsum failed");
        match e {
            ToolboxError::Load(LoadError::NotFound { .. }) => {
                println!("{}", constants::MSG_FILE_NOT_FOUND)
            }
            ToolboxError::Load(LoadError::Io { source, .. }) => {
                println!("Error reading file: {source}")
            }
            other => println!("Error: {other}"),
        }
        std::process::exit(1);
    }
}

/// Load, report, and optionally export. Every error is fatal to the caller.
fn run(cli: &Cli, layout: TableLayout) -> Result<()> {
    let entries = loader::load_entries(&cli.path)?;

    let selected: Vec<&LogEntry> = match cli.level.as_deref() {
        Some(level) => summary::filter_by_level(&entries, level),
        None => entries.iter().collect(),
    };

    print_report(&entries, &selected, cli.level.as_deref(), layout).map_err(|e| {
        ToolboxError::Io {
            operation: "writing report",
            source: e,
        }
    })?;

    if let Some(ref export_path) = cli.export {
        let format = cli
            .export_format
            .unwrap_or_else(|| ExportFormat::from_path(export_path));
        let count = write_export(&selected, export_path, format)?;
        tracing::info!(count, path = %export_path.display(), "Export complete");
        println!("Exported {count} entries to '{}'", export_path.display());
    }

    Ok(())
}

/// Counts table, then the details section when a level was requested.
fn print_report(
    entries: &[LogEntry],
    selected: &[&LogEntry],
    level: Option<&str>,
    layout: TableLayout,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let counts = summary::count_by_level(entries);
    report::write_counts(&mut out, &counts, layout)?;

    if let Some(level) = level {
        report::write_details(&mut out, &summary::normalise_level(level), selected)?;
    }
    out.flush()
}

fn write_export(
    entries: &[&LogEntry],
    path: &Path,
    format: ExportFormat,
) -> std::result::Result<usize, ExportError> {
    let writer = fs::create_buffered(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    export::export(entries, writer, path, format)
}
