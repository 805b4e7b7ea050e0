//! Task assignment.

use agentnet_core::{Agent, Task};
use std::collections::VecDeque;
use tracing::info;

/// Hands tasks to agents.
///
/// The internal queue is never filled or drained; assignment is immediate.
pub struct TaskManager {
    queue: VecDeque<Task>,
}

impl TaskManager {
    /// Create a new task manager.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Have `agent` perform `task` and return the agent's confirmation.
    pub fn assign_task(&self, agent: &mut dyn Agent, task: &Task) -> String {
        info!("Assigning task: {} to {}", task, agent.name());
        agent.perform(task)
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
