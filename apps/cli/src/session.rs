//! # Session
//!
//! The read-eval-print loop. Owns the store and both text streams.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   store loaded, banner printed                                          │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   ┌──────────────────┐  command (incl. its own prompts)  ┌──────────┐   │
//! │   │ awaiting command │ ─────────────────────────────────►│ handler  │   │
//! │   │      "> "        │ ◄──────────── Flow::Continue ─────│          │   │
//! │   └──────────────────┘                                   └──────────┘   │
//! │            │                                                │           │
//! │            │ end of input                                   │ quit,     │
//! │            ▼ (no save)                                      ▼ saved     │
//! │        [ exit ] ◄───────────────────────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input inside a command's own prompt ends the session the same way.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use stockroom_store::{ItemStore, StoreConfig, StoreError};
use tracing::{debug, info, warn};

use crate::commands::{self, Command};
use crate::error::CliResult;

/// What the loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// The operator quit and the store was saved.
    Quit,
    /// Input closed. Nothing is saved.
    EndOfInput,
}

/// One interactive session over a store.
pub struct Session<R, W> {
    store: ItemStore,
    data_file: PathBuf,
    input: R,
    output: W,
    startup_error: Option<StoreError>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an already loaded store.
    pub fn new(store: ItemStore, data_file: impl Into<PathBuf>, input: R, output: W) -> Self {
        Session {
            store,
            data_file: data_file.into(),
            input,
            output,
            startup_error: None,
        }
    }

    /// Loads the store described by `config` and creates a session over it.
    ///
    /// An unreadable data file does not prevent the session from starting:
    /// the store starts empty and the error is shown before the banner.
    pub fn open(config: StoreConfig, input: R, output: W) -> Self {
        match ItemStore::open(&config) {
            Ok((store, report)) => {
                if !report.is_clean() {
                    info!(
                        skipped = report.skipped.len(),
                        defaulted = report.defaulted.len(),
                        "Data file loaded with corrections"
                    );
                }
                Session::new(store, config.data_file, input, output)
            }
            Err(err) => {
                warn!(error = %err, "Could not load data file");
                let mut session = Session::new(ItemStore::new(), config.data_file, input, output);
                session.startup_error = Some(err);
                session
            }
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        if let Some(err) = self.startup_error.take() {
            self.report_error(&err)?;
        }

        self.say("Inventory Manager")?;
        self.say("Type 'help' for commands.")?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                info!("End of input, leaving without saving");
                return Ok(());
            };

            let command = Command::parse(&line);
            debug!(?command, "Dispatching command");

            match commands::execute(self, command)? {
                Flow::Continue => {}
                Flow::Quit => return Ok(()),
                Flow::EndOfInput => {
                    info!("End of input inside a command, leaving without saving");
                    return Ok(());
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store this session edits.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Mutable access to the store, for command handlers.
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    /// The data file `save` and `quit` write to.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Splits the session into its store and output sink.
    pub fn into_parts(self) -> (ItemStore, W) {
        (self.store, self.output)
    }

    // =========================================================================
    // Terminal I/O
    // =========================================================================

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD, the same way the data file is
    /// read, so a stray byte is an input problem for the command and not a
    /// terminal failure.
    ///
    /// ## Returns
    /// * `Ok(Some(line))` - The line, without its line terminator
    /// * `Ok(None)` - Input is closed
    pub fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.contains(char::REPLACEMENT_CHARACTER) {
            debug!("Replaced invalid UTF-8 in operator input");
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows a store failure to the operator.
    pub fn report_error(&mut self, err: &StoreError) -> CliResult<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    /// Writes pre-rendered text as-is. Renderers end every line with `\n`.
    pub fn write_block(&mut self, text: &str) -> CliResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
