//! # Item Commands
//!
//! `add`, `update` and `remove`.
//!
//! ## Prompting Rules
//! ```text
//! ┌──────────┬──────────────────────────┬───────────────────────────────────┐
//! │ command  │ bad input                │ result                            │
//! ├──────────┼──────────────────────────┼───────────────────────────────────┤
//! │ add      │ empty name / bad number  │ ask again until valid             │
//! │ update   │ bad id                   │ "Invalid id.", command ends       │
//! │ update   │ bad qty / price          │ that field skipped, others apply  │
//! │ remove   │ bad id                   │ "Invalid id.", command ends       │
//! └──────────┴──────────────────────────┴───────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{
    parse_item_id, parse_quantity, parse_unit_price, validate_item_name,
};
use stockroom_core::{ItemId, ValidationResult};
use stockroom_store::ItemPatch;
use tracing::debug;

use crate::error::CliResult;
use crate::session::{Flow, Session};

/// Prompts for a new item and adds it.
pub fn add<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    let Some(name) = ask_until_valid(
        session,
        "Enter name: ",
        "Name cannot be empty. Enter name: ",
        validate_item_name,
    )?
    else {
        return Ok(Flow::EndOfInput);
    };

    let Some(quantity) = ask_until_valid(
        session,
        "Enter quantity: ",
        "Invalid number. Enter quantity: ",
        parse_quantity,
    )?
    else {
        return Ok(Flow::EndOfInput);
    };

    let Some(unit_price) = ask_until_valid(
        session,
        "Enter price: ",
        "Invalid number. Enter price: ",
        parse_unit_price,
    )?
    else {
        return Ok(Flow::EndOfInput);
    };

    match session.store_mut().add(name, quantity, unit_price) {
        Ok(id) => session.say(&format!("Added item id {}.", id))?,
        Err(err) => session.report_error(&err)?,
    }
    Ok(Flow::Continue)
}

/// Prompts for an id, then offers each field for replacement.
///
/// A blank answer keeps the current value. An invalid quantity or price
/// skips only that field.
pub fn update<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    let id = match ask_item_id(session, "Enter item id to update: ")? {
        IdAnswer::Valid(id) => id,
        IdAnswer::Invalid => return Ok(Flow::Continue),
        IdAnswer::Closed => return Ok(Flow::EndOfInput),
    };

    let Some(current) = session.store().find_by_id(id).cloned() else {
        session.say("Item not found.")?;
        return Ok(Flow::Continue);
    };

    let mut patch = ItemPatch::default();

    session.say(&format!("Current name: {}", current.name))?;
    let Some(answer) = session.prompt("New name (leave blank to keep): ")? else {
        return Ok(Flow::EndOfInput);
    };
    // Whitespace-only counts as blank
    if let Ok(name) = validate_item_name(&answer) {
        patch.name = Some(name);
    }

    session.say(&format!("Current qty: {}", current.quantity))?;
    let Some(answer) = session.prompt("New qty (leave blank to keep): ")? else {
        return Ok(Flow::EndOfInput);
    };
    if !answer.trim().is_empty() {
        match parse_quantity(&answer) {
            Ok(quantity) => patch.quantity = Some(quantity),
            Err(_) => session.say("Invalid qty; update skipped.")?,
        }
    }

    session.say(&format!("Current price: {}", current.unit_price))?;
    let Some(answer) = session.prompt("New price (leave blank to keep): ")? else {
        return Ok(Flow::EndOfInput);
    };
    if !answer.trim().is_empty() {
        match parse_unit_price(&answer) {
            Ok(unit_price) => patch.unit_price = Some(unit_price),
            Err(_) => session.say("Invalid price; update skipped.")?,
        }
    }

    if patch.is_empty() {
        debug!(id, "Nothing to change");
    }
    // `current` was found above and the session is the store's only user,
    // so the error arm is unreachable today.
    match session.store_mut().update(id, patch) {
        Ok(_) => session.say("Item updated.")?,
        Err(err) => session.report_error(&err)?,
    }
    Ok(Flow::Continue)
}

/// Prompts for an id and removes that item.
pub fn remove<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<Flow> {
    let id = match ask_item_id(session, "Enter item id to remove: ")? {
        IdAnswer::Valid(id) => id,
        IdAnswer::Invalid => return Ok(Flow::Continue),
        IdAnswer::Closed => return Ok(Flow::EndOfInput),
    };

    if session.store_mut().remove_by_id(id) {
        session.say("Item removed.")?;
    } else {
        session.say("Item not found.")?;
    }
    Ok(Flow::Continue)
}

// =============================================================================
// Prompt Helpers
// =============================================================================

enum IdAnswer {
    Valid(ItemId),
    /// Already reported to the operator.
    Invalid,
    Closed,
}

/// Asks once for an id. An invalid answer is reported, not re-asked.
fn ask_item_id<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    prompt: &str,
) -> CliResult<IdAnswer> {
    let Some(answer) = session.prompt(prompt)? else {
        return Ok(IdAnswer::Closed);
    };

    match parse_item_id(&answer) {
        Ok(id) => Ok(IdAnswer::Valid(id)),
        Err(_) => {
            session.say("Invalid id.")?;
            Ok(IdAnswer::Invalid)
        }
    }
}

/// Asks until `parse` accepts the answer. `None` means input closed.
fn ask_until_valid<R, W, T>(
    session: &mut Session<R, W>,
    first_prompt: &str,
    retry_prompt: &str,
    parse: impl Fn(&str) -> ValidationResult<T>,
) -> CliResult<Option<T>>
where
    R: BufRead,
    W: Write,
{
    let mut prompt = first_prompt;
    loop {
        let Some(answer) = session.prompt(prompt)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(error = %err, "Re-prompting");
                prompt = retry_prompt;
            }
        }
    }
}
