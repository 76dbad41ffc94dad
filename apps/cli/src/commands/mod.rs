//! # Commands
//!
//! Parsing of the command line and dispatch to handlers.
//!
//! ## Command Table
//! ```text
//! ┌──────────┬───────────────┬──────────────────────────────────────────────┐
//! │ input    │ handler       │ effect                                       │
//! ├──────────┼───────────────┼──────────────────────────────────────────────┤
//! │ list     │ query::list   │ table of all items / "No items in inventory."│
//! │ add      │ item::add     │ prompts name, qty, price; reports new id     │
//! │ update   │ item::update  │ prompts id, then each field (blank = keep)   │
//! │ remove   │ item::remove  │ prompts id                                   │
//! │ search   │ query::search │ prompts substring                            │
//! │ save     │ persist::save │ rewrites the data file                       │
//! │ help     │ (inline)      │ command list                                 │
//! │ quit     │ persist::quit │ save, then leave                             │
//! │ (blank)  │ (inline)      │ nothing                                      │
//! │ other    │ (inline)      │ "Unknown command. ..."                       │
//! └──────────┴───────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Matching is exact and case-sensitive after trimming surrounding whitespace.
//! Nothing after the command word is accepted: `list all` is unknown.

pub mod item;
pub mod persist;
pub mod query;

use std::io::{BufRead, Write};

use crate::error::CliResult;
use crate::render;
use crate::session::{Flow, Session};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Update,
    Remove,
    Search,
    Save,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// Anything else, trimmed.
    Unknown(String),
}

impl Command {
    /// Parses one line of operator input.
    pub fn parse(line: &str) -> Command {
        match line.trim() {
            "list" => Command::List,
            "add" => Command::Add,
            "update" => Command::Update,
            "remove" => Command::Remove,
            "search" => Command::Search,
            "save" => Command::Save,
            "help" => Command::Help,
            "quit" => Command::Quit,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Runs one command to completion, including its follow-up prompts.
pub fn execute<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    command: Command,
) -> CliResult<Flow> {
    match command {
        Command::List => query::list(session),
        Command::Add => item::add(session),
        Command::Update => item::update(session),
        Command::Remove => item::remove(session),
        Command::Search => query::search(session),
        Command::Save => persist::save(session),
        Command::Quit => persist::quit(session),
        Command::Help => {
            session.write_block(render::help_text())?;
            Ok(Flow::Continue)
        }
        Command::Empty => Ok(Flow::Continue),
        Command::Unknown(_) => {
            session.say("Unknown command. Type 'help' for commands.")?;
            Ok(Flow::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("  add\t"), Command::Add);
        assert_eq!(Command::parse("update"), Command::Update);
        assert_eq!(Command::parse("remove"), Command::Remove);
        assert_eq!(Command::parse("search"), Command::Search);
        assert_eq!(Command::parse("save"), Command::Save);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse(" quit "), Command::Quit);
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("LIST"), Command::Unknown("LIST".to_string()));
        assert_eq!(
            Command::parse("list all"),
            Command::Unknown("list all".to_string())
        );
    }
}
