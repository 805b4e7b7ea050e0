//! Execution errors.

/// Error type for execution operations.
pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Errors raised while resolving agent types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    /// No implementation is registered under the requested name
    #[error("Unknown agent type: {name} (known: {})", .known.join(", "))]
    UnknownAgentType {
        /// Requested type name
        name: String,
        /// Registered type names
        known: Vec<String>,
    },
}

/// Errors that halt an orchestrator run.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Agent spawning failed
    #[error("Spawn error: {0}")]
    Spawn(#[from] SpawnError),
}
