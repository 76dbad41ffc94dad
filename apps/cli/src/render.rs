//! # Rendering
//!
//! Tab-separated item tables and the help text.
//!
//! ## Table Layouts
//! ```text
//! list                                     search
//! ID      Name            Qty     Price    ID      Name    Qty     Price
//! ----------------------------------------  --------------------------------
//! 1       Widget          5       2.5      1       Widget  5       2.5
//! ```
//!
//! `list` pads names shorter than 8 characters with a second tab so short and
//! long names line up on a standard 8-column terminal.

use std::fmt::Write;

use stockroom_core::Item;

const LIST_RULE_WIDTH: usize = 40;
const SEARCH_RULE_WIDTH: usize = 32;
const TAB_WIDTH: usize = 8;

/// Renders every item for the `list` command.
pub fn list_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items in inventory.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("ID\tName\t\tQty\tPrice\n");
    push_rule(&mut out, LIST_RULE_WIDTH);

    for item in items {
        let pad = if item.name.chars().count() < TAB_WIDTH { "\t" } else { "" };
        let _ = writeln!(
            out,
            "{}\t{}\t{}{}\t{}",
            item.id, item.name, pad, item.quantity, item.unit_price
        );
    }
    out
}

/// Renders search hits for the `search` command.
pub fn search_table(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No matches.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("ID\tName\tQty\tPrice\n");
    push_rule(&mut out, SEARCH_RULE_WIDTH);

    for item in items {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            item.id, item.name, item.quantity, item.unit_price
        );
    }
    out
}

/// The static list of commands.
pub fn help_text() -> &'static str {
    concat!(
        "Commands:\n",
        "  list    - show all items\n",
        "  add     - add a new item\n",
        "  update  - update an existing item by id\n",
        "  remove  - remove item by id\n",
        "  search  - search items by name\n",
        "  save    - save inventory to file\n",
        "  help    - show this help\n",
        "  quit    - save & exit\n",
    )
}

fn push_rule(out: &mut String, width: usize) {
    out.push_str(&"-".repeat(width));
    out.push('\n');
}
