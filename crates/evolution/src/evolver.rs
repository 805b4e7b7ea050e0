//! System evolver - lets every agent learn.

use agentnet_core::Agent;
use tracing::debug;

/// Runs the learning step across a set of agents.
pub struct SystemEvolver;

impl SystemEvolver {
    /// Create a new evolver.
    pub fn new() -> Self {
        Self
    }

    /// Call `learn` on each agent, in order.
    pub fn evolve(&self, agents: &mut [Box<dyn Agent>]) {
        for agent in agents.iter_mut() {
            let before = agent.performance_metric();
            agent.learn();
            debug!(
                agent = agent.name(),
                before,
                after = agent.performance_metric(),
                "Agent learned"
            );
        }
    }
}

impl Default for SystemEvolver {
    fn default() -> Self {
        Self::new()
    }
}
