//! Execution layer - agent spawning, task sourcing, assignment and the run loop.

#![warn(missing_docs)]

pub mod error;
pub mod manager;
pub mod scheduler;
pub mod spawner;
pub mod engine;

pub use error::{ExecutionError, Result, SpawnError};
pub use manager::TaskManager;
pub use scheduler::{TaskSource, FixedSchedule, DEFAULT_TASKS};
pub use spawner::{AgentFactory, AgentRegistry, AgentSpawner, TASK_AGENT};
pub use engine::{Orchestrator, OrchestratorConfig, RunReport, AssignmentRecord};
