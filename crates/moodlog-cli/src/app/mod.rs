//! Application-level utilities for the Moodlog CLI.
//!
//! - Path resolution for config and journal files
//! - Settings merged from flags and the config file
//! - Opening the entry store on the configured backend

mod context;
mod resolver;
mod settings;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_entry_id};
pub use settings::Settings;
