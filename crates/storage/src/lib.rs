//! File collaborators for AgentNet.
//!
//! Plain text load/save helpers, a trait-based output store with a
//! filesystem implementation, and a sweeper for stale log files.

#![warn(missing_docs)]

pub mod trait_;
pub mod file;
pub mod file_store;
pub mod sweep;

pub use trait_::{OutputStore, StorageError, Result};
pub use file::{load_file, save_output, DEFAULT_OUTPUT};
pub use file_store::FileStore;
pub use sweep::{delete_useless_files, LogSweeper, SweepReport, DEFAULT_SWEEP_DIR};
