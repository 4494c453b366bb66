//! Snapshot storage backends.
//!
//! - **json_file**: pretty JSON array on disk (default)
//! - **sqlite**: embedded SQLite database
//! - **memory**: in-process snapshot for tests

mod json_file;
mod memory;
mod sqlite;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::SnapshotStore;
