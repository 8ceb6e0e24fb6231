// Toolbox - core/command.rs
//
// Assistant command parsing, per-command handlers, and dispatch.
// Core layer: pure logic over an explicitly passed ContactStore.
//
// Handlers return `Result<String, CommandError>`; `dispatch` turns errors
// into their user-facing text so a failed command never ends the session.

use crate::core::contacts::{ContactStore, PhoneNumber};
use crate::util::constants;
use crate::util::error::CommandError;

// =============================================================================
// Input parsing
// =============================================================================

/// A tokenised input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// First token, lowercased. Empty for blank input.
    pub command: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

/// Split a raw line on whitespace into a command word and its arguments.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(first) => ParsedInput {
            command: first.trim().to_lowercase(),
            args: tokens.map(str::to_string).collect(),
        },
        None => ParsedInput::default(),
    }
}

/// Recognised command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    Hello,
    Exit,
    Empty,
    Unknown,
}

impl Command {
    pub fn from_word(word: &str) -> Self {
        match word {
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "hello" => Self::Hello,
            "exit" | "close" => Self::Exit,
            "" => Self::Empty,
            _ => Self::Unknown,
        }
    }

    /// Format hint printed when the command is given no arguments at all.
    fn format_hint(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("Format: add <name> <phone>"),
            Self::Change => Some("Format: change <name> <new_phone>"),
            Self::Phone => Some("Format: phone <name>"),
            _ => None,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// `add <name> <phone>`: insert or overwrite a contact.
pub fn add_contact(args: &[String], store: &mut ContactStore) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgCount);
    };
    let phone = PhoneNumber::parse(phone)?;
    store.upsert(name, phone);
    Ok(format!("Contact {name} added."))
}

/// `change <name> <new_phone>`: overwrite an existing contact's phone.
pub fn change_contact(args: &[String], store: &mut ContactStore) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgCount);
    };
    // Phone is validated before the lookup.
    let phone = PhoneNumber::parse(phone)?;
    store.update(name, phone)?;
    Ok(format!("Contact {name} updated."))
}

/// `phone <name>`: show one contact.
pub fn show_phone(args: &[String], store: &ContactStore) -> Result<String, CommandError> {
    let [name] = args else {
        return Err(CommandError::MissingName);
    };
    store
        .get(name)
        .map(|phone| format!("{name}: {phone}"))
        .ok_or_else(|| CommandError::NotFound { name: name.clone() })
}

/// `all`: 1-indexed listing of every contact, or a notice when empty.
pub fn show_all(store: &ContactStore) -> String {
    if store.is_empty() {
        return constants::MSG_NO_CONTACTS.to_string();
    }
    store
        .iter()
        .enumerate()
        .map(|(i, (name, phone))| format!("{}. {name}: {phone}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Help listing shown for unrecognised commands.
pub fn help_text() -> String {
    let mut text = constants::MSG_INVALID_COMMAND.to_string();
    for (_, usage) in constants::COMMAND_HELP {
        text.push_str("\n   ");
        text.push_str(usage);
    }
    text
}

// =============================================================================
// Dispatch
// =============================================================================

/// What the REPL should do after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (if any) and read the next line.
    Continue(Option<String>),
    /// Print the farewell and stop.
    Exit(String),
}

/// Run one parsed input line against the store.
pub fn dispatch(input: &ParsedInput, store: &mut ContactStore) -> Outcome {
    let command = Command::from_word(&input.command);

    if input.args.is_empty() {
        if let Some(hint) = command.format_hint() {
            return Outcome::Continue(Some(hint.to_string()));
        }
    }

    let result = match command {
        Command::Exit => return Outcome::Exit(constants::MSG_FAREWELL.to_string()),
        Command::Empty => return Outcome::Continue(None),
        Command::Hello => Ok(constants::MSG_GREETING.to_string()),
        Command::All => Ok(show_all(store)),
        Command::Unknown => Ok(help_text()),
        Command::Add => add_contact(&input.args, store),
        Command::Change => change_contact(&input.args, store),
        Command::Phone => show_phone(&input.args, store),
    };

    let reply = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(command = %input.command, error = ?e, "Command rejected");
            e.to_string()
        }
    };
    Outcome::Continue(Some(reply))
}
