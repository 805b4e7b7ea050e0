//! The orchestrator - runs the dispatch loop once.

use crate::{AgentSpawner, FixedSchedule, Result, TaskManager, TaskSource, TASK_AGENT};
use agentnet_core::{Agent, RunId, Task, Time};
use agentnet_evolution::{AgentOptimizer, SystemEvolver, SystemMetrics};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Agent types to spawn, one agent per entry
    pub agent_types: Vec<String>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            agent_types: vec![TASK_AGENT.to_string()],
        }
    }
}

impl OrchestratorConfig {
    /// Set the agent types to spawn.
    pub fn with_agent_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agent_types = types.into_iter().map(Into::into).collect();
        self
    }
}

/// Wires spawner, task source, task manager and evolver together.
///
/// A run is one linear pass:
/// ```text
/// Spawn → for each task, for each agent: Assign → Evolve
/// ```
pub struct Orchestrator {
    spawner: AgentSpawner,
    manager: TaskManager,
    source: Box<dyn TaskSource>,
    optimizer: AgentOptimizer,
    evolver: SystemEvolver,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create an orchestrator with the built-in agents and the fixed schedule.
    pub fn new() -> Self {
        Self {
            spawner: AgentSpawner::default(),
            manager: TaskManager::new(),
            source: Box::new(FixedSchedule::new()),
            optimizer: AgentOptimizer::new(),
            evolver: SystemEvolver::new(),
            config: OrchestratorConfig::default(),
        }
    }

    /// Set the agent spawner.
    pub fn with_spawner(mut self, spawner: AgentSpawner) -> Self {
        self.spawner = spawner;
        self
    }

    /// Set the task source.
    pub fn with_source(mut self, source: Box<dyn TaskSource>) -> Self {
        self.source = source;
        self
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the loop to completion.
    ///
    /// Fails only if an agent type cannot be resolved, before any task is
    /// assigned.
    pub fn run(&self) -> Result<RunReport> {
        let run_id = RunId::new();
        let started_at = chrono::Utc::now();

        info!(%run_id, types = ?self.config.agent_types, "Spawning agents");
        let mut agents = self.spawner.spawn_agents(self.config.agent_types.as_slice())?;

        let tasks = self.source.get_tasks();
        let assignments = self.dispatch(&mut agents, &tasks);

        let before_evolve = self.optimizer.snapshot(&agents);
        self.evolver.evolve(&mut agents);
        let after_evolve = self.optimizer.snapshot(&agents);

        info!(
            %run_id,
            agents = agents.len(),
            assignments = assignments.len(),
            "Run complete"
        );

        Ok(RunReport {
            run_id,
            started_at,
            finished_at: chrono::Utc::now(),
            assignments,
            before_evolve,
            after_evolve,
        })
    }

    /// Assign every task to every agent: tasks outer, agents inner.
    pub fn dispatch(&self, agents: &mut [Box<dyn Agent>], tasks: &[Task]) -> Vec<AssignmentRecord> {
        let mut records = Vec::with_capacity(tasks.len() * agents.len());
        for task in tasks {
            for agent in agents.iter_mut() {
                let outcome = self.manager.assign_task(agent.as_mut(), task);
                records.push(AssignmentRecord {
                    task: task.clone(),
                    agent: agent.name().to_string(),
                    outcome,
                });
            }
        }
        records
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// One task handed to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// The task
    pub task: Task,
    /// Name of the agent that performed it
    pub agent: String,
    /// What the agent returned
    pub outcome: String,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run identifier
    pub run_id: RunId,
    /// When the run started
    pub started_at: Time,
    /// When the run finished
    pub finished_at: Time,
    /// Every assignment, in dispatch order
    pub assignments: Vec<AssignmentRecord>,
    /// Agent metrics after dispatch, before learning
    pub before_evolve: SystemMetrics,
    /// Agent metrics after learning
    pub after_evolve: SystemMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgentRegistry, ExecutionError, SpawnError, DEFAULT_TASKS};

    struct Numbered(usize);

    impl TaskSource for Numbered {
        fn get_tasks(&self) -> Vec<Task> {
            (0..self.0).map(|i| Task::new(format!("job_{i}"))).collect()
        }
    }

    fn expected_tasks() -> Vec<Task> {
        DEFAULT_TASKS.iter().copied().map(Task::from).collect()
    }

    #[test]
    fn test_default_run_end_to_end() {
        let report = Orchestrator::new().run().unwrap();

        assert_eq!(report.assignments.len(), 3);
        for (record, task) in report.assignments.iter().zip(expected_tasks()) {
            assert_eq!(record.agent, "TaskAgent");
            assert!(record.outcome.contains(task.label()));
            assert_eq!(record.task, task);
        }

        let before = &report.before_evolve.agents[0];
        assert_eq!(before.memory, expected_tasks());
        assert_eq!(before.performance, 3);

        let after = &report.after_evolve.agents[0];
        assert_eq!(after.memory, expected_tasks());
        assert_eq!(after.performance, 3);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_dispatch_order_is_tasks_outer_agents_inner() {
        let orchestrator = Orchestrator::new();
        let mut agents = AgentSpawner::default()
            .spawn_agents(&["task_agent", "task_agent"])
            .unwrap();
        let tasks = vec![Task::new("a"), Task::new("b")];

        let records = orchestrator.dispatch(&mut agents, &tasks);

        let order: Vec<_> = records.iter().map(|r| r.task.label()).collect();
        assert_eq!(order, ["a", "a", "b", "b"]);
        for agent in &agents {
            assert_eq!(agent.recent(), tasks.as_slice());
        }
    }

    #[test]
    fn test_evolve_trims_long_runs() {
        let report = Orchestrator::new()
            .with_source(Box::new(Numbered(8)))
            .run()
            .unwrap();

        assert_eq!(report.before_evolve.agents[0].performance, 8);
        let after = &report.after_evolve.agents[0];
        assert_eq!(after.performance, 5);
        assert_eq!(after.memory.first(), Some(&Task::new("job_3")));
        assert_eq!(after.memory.last(), Some(&Task::new("job_7")));
    }

    #[test]
    fn test_unknown_agent_type_halts_run() {
        let orchestrator = Orchestrator::new()
            .with_config(OrchestratorConfig::default().with_agent_types(["task_agent", "nope"]));

        let err = orchestrator.run().unwrap_err();
        assert!(matches!(
            err,
            ExecutionError::Spawn(SpawnError::UnknownAgentType { ref name, .. }) if name == "nope"
        ));
    }

    #[test]
    fn test_no_agents_means_no_assignments() {
        let orchestrator = Orchestrator::new()
            .with_spawner(AgentSpawner::new(AgentRegistry::builtin()))
            .with_config(OrchestratorConfig::default().with_agent_types(Vec::<String>::new()));

        let report = orchestrator.run().unwrap();
        assert!(report.assignments.is_empty());
        assert!(report.after_evolve.agents.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let report = Orchestrator::new().run().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["assignments"][0]["task"], "scrape_jobs");
        assert_eq!(json["assignments"][0]["outcome"], "Performed scrape_jobs");
        assert_eq!(json["after_evolve"]["agents"][0]["performance"], 3);
    }
}
