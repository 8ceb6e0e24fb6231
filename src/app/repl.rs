// Toolbox - app/repl.rs
//
// Interactive read-dispatch-print loop for the contact assistant.
//
// The loop owns its ContactStore for the whole session. It is generic over
// the input (BufRead) and output (Write) so tests drive it with in-memory
// buffers instead of a terminal.
//
// End of input is treated as an implicit `exit`.

use crate::core::command::{self, Outcome, ParsedInput};
use crate::core::contacts::ContactStore;
use crate::util::constants;
use std::any::Any;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Terminated,
}

/// User-tunable REPL behaviour (from config.toml).
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Text written before each read.
    pub prompt: String,
    /// Print the welcome banner on start.
    pub greeting: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: constants::DEFAULT_PROMPT.to_string(),
            greeting: true,
        }
    }
}

/// One assistant session.
#[derive(Debug)]
pub struct Repl {
    store: ContactStore,
    state: ReplState,
    options: ReplOptions,
    consecutive_failures: usize,
}

impl Repl {
    /// New session in the `Running` state with an empty store.
    pub fn new(options: ReplOptions) -> Self {
        Self {
            store: ContactStore::new(),
            state: ReplState::Running,
            options,
            consecutive_failures: 0,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Run until `exit`/`close`, end of input, or repeated I/O failure.
    ///
    /// Errors inside a turn are reported as "Unexpected error" and the loop
    /// continues; only `MAX_CONSECUTIVE_TURN_FAILURES` failed turns in a row
    /// stop it.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) {
        self.run_with(input, output, command::dispatch);
    }

    /// The session loop with the command dispatcher supplied by the caller.
    fn run_with<R, W, F>(&mut self, input: &mut R, output: &mut W, dispatch: F)
    where
        R: BufRead,
        W: Write,
        F: Fn(&ParsedInput, &mut ContactStore) -> Outcome,
    {
        tracing::info!("Assistant session started");

        if self.options.greeting {
            if let Err(e) = write_banner(output) {
                tracing::warn!(error = %e, "Failed to write welcome banner");
            }
        }

        while self.state == ReplState::Running {
            match self.turn(input, output, &dispatch) {
                Ok(()) => self.consecutive_failures = 0,
                Err(e) => {
                    self.consecutive_failures += 1;
                    tracing::warn!(
                        error = %e,
                        failures = self.consecutive_failures,
                        "REPL turn failed"
                    );
                    // Output may be the thing that broke; nothing else to do.
                    let _ = writeln!(output, "Unexpected error: {e}");

                    if self.consecutive_failures >= constants::MAX_CONSECUTIVE_TURN_FAILURES {
                        tracing::error!(
                            failures = self.consecutive_failures,
                            "Giving up after repeated I/O failures"
                        );
                        self.state = ReplState::Terminated;
                    }
                }
            }
        }

        tracing::info!(contacts = self.store.len(), "Assistant session ended");
    }

    /// Prompt, read one line, dispatch it, and print the reply.
    fn turn<R, W, F>(&mut self, input: &mut R, output: &mut W, dispatch: &F) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        F: Fn(&ParsedInput, &mut ContactStore) -> Outcome,
    {
        write!(output, "{}", self.options.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("End of input; treating as exit");
            writeln!(output)?;
            writeln!(output, "{}", constants::MSG_FAREWELL)?;
            self.state = ReplState::Terminated;
            return Ok(());
        }

        let parsed = command::parse_input(&line);
        tracing::debug!(command = %parsed.command, args = parsed.args.len(), "Dispatching");

        let store = &mut self.store;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| dispatch(&parsed, store)));

        match outcome {
            Ok(Outcome::Continue(Some(text))) => writeln!(output, "{text}")?,
            Ok(Outcome::Continue(None)) => {}
            Ok(Outcome::Exit(text)) => {
                writeln!(output, "{text}")?;
                self.state = ReplState::Terminated;
            }
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                tracing::error!(command = %parsed.command, detail, "Command handler panicked");
                writeln!(output, "Unexpected error: {detail}")?;
            }
        }
        Ok(())
    }
}

/// Welcome text printed once per session.
fn write_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", constants::MSG_WELCOME)?;
    writeln!(output, "{}", constants::MSG_AVAILABLE)
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
