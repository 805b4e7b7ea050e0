//! Task sources.

use agentnet_core::Task;

/// The fixed task list every run works through.
pub const DEFAULT_TASKS: [&str; 3] = ["scrape_jobs", "generate_resume", "send_email"];

/// Supplies the ordered tasks for a run.
pub trait TaskSource: Send + Sync {
    /// Tasks to dispatch, in order.
    fn get_tasks(&self) -> Vec<Task>;
}

/// A source that always yields [`DEFAULT_TASKS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSchedule;

impl FixedSchedule {
    /// Create a new fixed schedule.
    pub fn new() -> Self {
        Self
    }
}

impl TaskSource for FixedSchedule {
    fn get_tasks(&self) -> Vec<Task> {
        DEFAULT_TASKS.iter().copied().map(Task::from).collect()
    }
}
