//! # Stockroom Entry Point
//!
//! ## Startup Sequence
//! 1. Read configuration from the environment
//! 2. Initialize tracing (stderr)
//! 3. Load the data file into an `ItemStore`
//! 4. Run the command loop on stdin/stdout until `quit` or end of input

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    stockroom_cli::run().context("stockroom session failed")
}
