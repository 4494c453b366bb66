//! UI primitives for the Moodlog CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges, mood colors and markers
//! - **Render**: headers, key-value lines, tables, hints, errors
//! - **Format**: string and date helpers

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;

pub use render::{header, hint, kv, print, print_error, receipt, simple_table, table, Column};

pub use format::{format_timestamp, short_id, single_line, truncate};
