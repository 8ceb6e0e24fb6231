// Toolbox - bin/assistant.rs
//
// Contact assistant entry point. Handles:
// 1. CLI argument parsing
// 2. Config and logging initialisation
// 3. Running the REPL on stdin/stdout until exit or end of input

use clap::Parser;
use std::io;
use std::path::PathBuf;
use toolbox::app::repl::{Repl, ReplOptions};
use toolbox::platform::config;
use toolbox::util::constants;
use toolbox::util::logging;

/// Interactive contact book: add, change, phone, all, hello, exit.
///
/// Contacts live in memory for the session only.
#[derive(Parser, Debug)]
#[command(name = "assistant", version, about)]
struct Cli {
    /// Config file (default: platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let (app_config, config_warnings) = match cli.config.clone().or_else(config::default_config_path)
    {
        Some(path) => config::load_config(&path),
        None => (config::AppConfig::default(), Vec::new()),
    };

    logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using default");
    }

    // Handler panics are reported to the user by the REPL; the panic report
    // itself goes to the diagnostics log, not the terminal.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Panic in assistant");
    }));

    tracing::info!(version = constants::APP_VERSION, "assistant starting");

    let mut repl = Repl::new(ReplOptions {
        prompt: app_config.prompt,
        greeting: app_config.greeting,
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl.run(&mut stdin.lock(), &mut stdout.lock());
}
