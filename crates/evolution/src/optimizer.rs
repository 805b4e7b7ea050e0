//! Agent optimizer - reads agent performance.

use crate::{AgentMetrics, SystemMetrics};
use agentnet_core::Agent;

/// Evaluates agents. Never mutates them.
pub struct AgentOptimizer;

impl AgentOptimizer {
    /// Create a new optimizer.
    pub fn new() -> Self {
        Self
    }

    /// The agent's current performance metric.
    pub fn evaluate(&self, agent: &dyn Agent) -> usize {
        agent.performance_metric()
    }

    /// Capture metrics for every agent, preserving order.
    pub fn snapshot(&self, agents: &[Box<dyn Agent>]) -> SystemMetrics {
        SystemMetrics {
            agents: agents
                .iter()
                .map(|agent| AgentMetrics {
                    agent: agent.name().to_string(),
                    performance: self.evaluate(agent.as_ref()),
                    memory: agent.recent().to_vec(),
                })
                .collect(),
        }
    }
}

impl Default for AgentOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
