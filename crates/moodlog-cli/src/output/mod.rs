//! Output formatting helpers for the CLI.
//!
//! Formatting utilities for displaying entries in JSON, table and plain
//! text.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{mood_label, print_entry, print_entry_list};
