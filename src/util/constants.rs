// Toolbox - util/constants.rs
//
// Single source of truth for named constants, limits, defaults and the
// user-facing message texts of both tools.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Toolbox";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "toolbox";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
///
/// Both tools write their real output to stdout, so diagnostics stay quiet
/// unless asked for.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Log summariser
// =============================================================================

/// Number of whitespace-separated fields in a log line: date, time, level
/// and the message remainder.
pub const LOG_LINE_FIELDS: usize = 4;

/// Default width of the level column in the counts table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 16;

/// Default width of the count column in the counts table.
pub const DEFAULT_COUNT_COLUMN_WIDTH: usize = 8;

/// Minimum configurable table column width.
pub const MIN_COLUMN_WIDTH: usize = 1;

/// Maximum configurable table column width.
pub const MAX_COLUMN_WIDTH: usize = 64;

/// Header of the level column.
pub const LEVEL_COLUMN_TITLE: &str = "Level";

/// Header of the count column.
pub const COUNT_COLUMN_TITLE: &str = "Count";

pub const MSG_FILE_NOT_FOUND: &str = "File is not found";
pub const MSG_NO_LEVEL_ENTRIES: &str = "No entries for this level.";
pub const MSG_LOGSUM_USAGE: &str = "Usage: logsum <path_to_log_file> [log_level]";

// =============================================================================
// Contact assistant
// =============================================================================

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Consecutive failed REPL turns (input or output errors) tolerated before
/// the REPL gives up.
pub const MAX_CONSECUTIVE_TURN_FAILURES: usize = 3;

pub const MSG_WELCOME: &str = "Welcome to the assistant bot!";
pub const MSG_AVAILABLE: &str = "Available commands: add, change, phone, all, hello, exit";
pub const MSG_GREETING: &str = "How can I help you?";
pub const MSG_FAREWELL: &str = "Good bye!";
pub const MSG_NO_CONTACTS: &str = "No contacts available.";
pub const MSG_INVALID_COMMAND: &str = "Invalid command. Available commands:";

/// Usage lines shown for unknown commands, in display order.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("add", "add <name> <phone> - add a new contact"),
    ("change", "change <name> <new_phone> - change existing contact's phone"),
    ("phone", "phone <name> - show phone number of a contact"),
    ("all", "all - show all contacts"),
    ("hello", "hello - greet the bot"),
    ("exit", "exit - quit the bot"),
];
