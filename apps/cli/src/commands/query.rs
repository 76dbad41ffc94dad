//! # Query Commands
//!
//! `list` and `search`. Neither changes the store.

use std::io::{BufRead, Write};

use stockroom_core::validation::validate_search_term;
use tracing::debug;

use crate::error::CliResult;
use crate::render;
use crate::session::{Flow, Session};

/// Shows every item.
pub fn list<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    let table = render::list_table(session.store().items());
    session.write_block(&table)?;
    Ok(Flow::Continue)
}

/// Prompts for a substring and shows the items whose name contains it.
///
/// The term is used exactly as typed; only an empty term is refused.
pub fn search<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    let Some(raw) = session.prompt("Enter search term (name substring): ")? else {
        return Ok(Flow::EndOfInput);
    };

    let Ok(term) = validate_search_term(&raw) else {
        session.say("Empty search.")?;
        return Ok(Flow::Continue);
    };

    let hits = session.store().search_by_name(term);
    debug!(term, hits = hits.len(), "Search finished");

    let table = render::search_table(&hits);
    session.write_block(&table)?;
    Ok(Flow::Continue)
}
