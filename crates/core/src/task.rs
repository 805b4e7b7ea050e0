//! Task labels.

use serde::{Deserialize, Serialize};

/// A unit of work, identified only by its label.
///
/// Tasks carry no structure of their own. Two tasks are the same task when
/// their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Create a task from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The task label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Task {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Task {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
