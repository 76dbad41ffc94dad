//! # Stockroom CLI Library
//!
//! Interactive front end over the record store.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment-driven configuration
//! ├── error.rs        ◄─── CLI error type
//! ├── session.rs      ◄─── Read-eval-print loop, prompting
//! ├── render.rs       ◄─── Item tables and help text
//! └── commands/
//!     ├── mod.rs      ◄─── Command parsing & dispatch
//!     ├── item.rs     ◄─── add / update / remove
//!     ├── query.rs    ◄─── list / search
//!     └── persist.rs  ◄─── save / quit
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── prompts, tables, "Saved.", "Error: ..."  (the transcript)  │
//! │  stderr  ◄── tracing events, filtered by RUST_LOG (default: warn)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io;

use stockroom_store::StoreConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use session::Session;

/// Runs Stockroom against the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Read Configuration ───────────────────────────────────────────────► │
/// │     • STOCKROOM_DATA_FILE, default ./inventory.csv                      │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • Missing file → empty inventory                                    │
/// │     • Unreadable file → reported, empty inventory                       │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • Until `quit` (saves) or end of input (does not save)              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> CliResult<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    info!(data_file = %config.data_file.display(), "Starting Stockroom");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::open(
        StoreConfig::new(&config.data_file),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()?;

    info!("Stockroom exited");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store operation
/// - `RUST_LOG=stockroom_store=info` - Load/save summaries only
/// - Default: the configured filter (`warn`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
