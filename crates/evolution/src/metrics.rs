//! Agent metrics snapshots.

use agentnet_core::Task;
use serde::{Deserialize, Serialize};

/// Metrics for one agent at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Agent name
    pub agent: String,
    /// Performance metric reported by the agent
    pub performance: usize,
    /// Recent tasks held in memory
    pub memory: Vec<Task>,
}

/// Metrics for every agent in a run, in agent order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Per-agent metrics
    pub agents: Vec<AgentMetrics>,
}

impl SystemMetrics {
    /// Sum of all agent performance metrics.
    pub fn total_performance(&self) -> usize {
        self.agents.iter().map(|a| a.performance).sum()
    }
}
