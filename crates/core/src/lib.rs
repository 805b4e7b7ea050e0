//! AgentNet core data models.
//!
//! This crate defines the agent capability set and the small data types the
//! dispatch loop moves around: task labels, agent memory and run identifiers.

#![warn(missing_docs)]

// Identities
mod id;

// Task labels
mod task;

// Agents and their memory
mod memory;
mod agent;

// Re-exports
pub use id::RunId;
pub use task::Task;
pub use memory::{Horizon, Memory};
pub use agent::{Agent, TaskAgent, DEFAULT_MEMORY_WINDOW};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
