//! Agent registry and spawning.

use crate::SpawnError;
use agentnet_core::{Agent, TaskAgent};
use std::collections::BTreeMap;
use tracing::debug;

/// Registry key of the built-in [`TaskAgent`].
pub const TASK_AGENT: &str = "task_agent";

/// Zero-argument constructor for a registered agent type.
pub type AgentFactory = fn() -> Box<dyn Agent>;

/// Closed mapping from agent type names to their constructors.
#[derive(Clone)]
pub struct AgentRegistry {
    factories: BTreeMap<String, AgentFactory>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in agent type.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(TASK_AGENT, || Box::new(TaskAgent::new()));
        registry
    }

    /// Register a factory, replacing any previous one under the same name.
    pub fn register(&mut self, name: impl Into<String>, factory: AgentFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Instantiate one agent of the named type.
    pub fn create(&self, name: &str) -> Result<Box<dyn Agent>, SpawnError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| SpawnError::UnknownAgentType {
                name: name.to_string(),
                known: self.names(),
            })?;
        Ok(factory())
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("types", &self.names())
            .finish()
    }
}

/// Creates agents by type name.
#[derive(Debug, Clone, Default)]
pub struct AgentSpawner {
    registry: AgentRegistry,
}

impl AgentSpawner {
    /// Create a spawner over the given registry.
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry }
    }

    /// The registry backing this spawner.
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Spawn one agent per name, in input order.
    ///
    /// Fails on the first unknown name; no agents are returned in that case.
    pub fn spawn_agents<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Box<dyn Agent>>, SpawnError> {
        names
            .iter()
            .map(|name| -> Result<Box<dyn Agent>, SpawnError> {
                let agent = self.registry.create(name.as_ref())?;
                debug!(agent_type = name.as_ref(), agent = agent.name(), "Spawned agent");
                Ok(agent)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentnet_core::Task;

    struct EchoAgent {
        seen: Vec<Task>,
    }

    impl Agent for EchoAgent {
        fn name(&self) -> &str {
            "EchoAgent"
        }

        fn perform(&mut self, task: &Task) -> String {
            self.seen.push(task.clone());
            format!("echo {task}")
        }

        fn learn(&mut self) {
            self.seen.clear();
        }

        fn performance_metric(&self) -> usize {
            self.seen.len()
        }

        fn recent(&self) -> &[Task] {
            &self.seen
        }
    }

    #[test]
    fn test_spawn_task_agent() {
        let agents = AgentSpawner::default().spawn_agents(&[TASK_AGENT]).unwrap();

        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name(), "TaskAgent");
        assert!(agents[0].recent().is_empty());
    }

    #[test]
    fn test_spawn_preserves_input_order() {
        let mut registry = AgentRegistry::builtin();
        registry.register("echo", || Box::new(EchoAgent { seen: Vec::new() }));

        let agents = AgentSpawner::new(registry)
            .spawn_agents(&["echo", "task_agent", "echo"])
            .unwrap();

        let names: Vec<_> = agents.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["EchoAgent", "TaskAgent", "EchoAgent"]);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let spawner = AgentSpawner::default();
        let err = spawner
            .spawn_agents(&["task_agent", "ghost_agent"])
            .err()
            .unwrap();

        assert_eq!(
            err,
            SpawnError::UnknownAgentType {
                name: "ghost_agent".to_string(),
                known: vec!["task_agent".to_string()],
            }
        );
        assert!(err.to_string().contains("ghost_agent"));
    }

    #[test]
    fn test_empty_names_spawn_nothing() {
        let names: [&str; 0] = [];
        let agents = AgentSpawner::default().spawn_agents(&names).unwrap();
        assert!(agents.is_empty());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = AgentRegistry::builtin();
        assert!(registry.contains(TASK_AGENT));
        assert!(!registry.contains("TaskAgent"));
        assert_eq!(registry.names(), vec![TASK_AGENT.to_string()]);
        assert!(AgentRegistry::new().create(TASK_AGENT).is_err());
    }
}
