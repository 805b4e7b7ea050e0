//! Agent capability set and the built-in task agent.

use crate::{Horizon, Memory, Task};

/// How many recent tasks an agent keeps after learning.
pub const DEFAULT_MEMORY_WINDOW: usize = 5;

/// An actor that performs tasks and learns from them.
///
/// Anything implementing this trait can be registered with the spawner and
/// driven by the orchestrator.
pub trait Agent: Send {
    /// Agent name, fixed at construction.
    fn name(&self) -> &str;

    /// Perform a task and return a confirmation that contains its label.
    fn perform(&mut self, task: &Task) -> String;

    /// Trim working memory down to the most recent entries.
    fn learn(&mut self);

    /// Current performance metric. Equals the length of [`Agent::recent`].
    fn performance_metric(&self) -> usize;

    /// Recently performed tasks, oldest first.
    fn recent(&self) -> &[Task];
}

/// The default agent: records every task it performs.
#[derive(Debug, Clone)]
pub struct TaskAgent {
    name: String,
    memory: Memory,
    window: usize,
}

impl TaskAgent {
    /// Create a new task agent with empty memory.
    pub fn new() -> Self {
        Self {
            name: "TaskAgent".to_string(),
            memory: Memory::new(),
            window: DEFAULT_MEMORY_WINDOW,
        }
    }
}

impl Default for TaskAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for TaskAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn perform(&mut self, task: &Task) -> String {
        self.memory.remember(task.clone(), Horizon::ShortTerm);
        format!("Performed {}", task)
    }

    fn learn(&mut self) {
        self.memory.retain_recent(self.window);
    }

    fn performance_metric(&self) -> usize {
        self.memory.short_term().len()
    }

    fn recent(&self) -> &[Task] {
        self.memory.short_term()
    }
}
