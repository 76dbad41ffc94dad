//! # Persistence Commands
//!
//! `save` and `quit`. A failed write is reported and the session stays open,
//! so nothing is lost by quitting into a broken destination.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::CliResult;
use crate::session::{Flow, Session};

/// Writes the store to the data file.
pub fn save<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    if write_data_file(session)? {
        session.say("Saved.")?;
    }
    Ok(Flow::Continue)
}

/// Writes the store to the data file and ends the session.
pub fn quit<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    if !write_data_file(session)? {
        return Ok(Flow::Continue);
    }
    session.say("Goodbye.")?;
    Ok(Flow::Quit)
}

/// Returns whether the save succeeded. Failures are shown to the operator.
fn write_data_file<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<bool> {
    match session.store().save(session.data_file()) {
        Ok(()) => Ok(true),
        Err(err) => {
            warn!(error = %err, "Save failed");
            session.report_error(&err)?;
            Ok(false)
        }
    }
}
