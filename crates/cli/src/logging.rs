//! Named loggers over a single tracing sink.
//!
//! The first logger requested installs a timestamped fmt subscriber on
//! stderr. Loggers are cached by name for the life of the process.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex, Once, OnceLock, PoisonError};
use tracing_subscriber::EnvFilter;

/// Level used when none is configured.
pub const DEFAULT_LEVEL: &str = "info";

static SINK: Once = Once::new();
static LOGGERS: OnceLock<Mutex<HashMap<String, Logger>>> = OnceLock::new();

/// Install the sink with the given level filter.
///
/// `RUST_LOG` takes precedence when set. Only the first call has an effect.
pub fn init(level: &str) {
    SINK.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        // Fails if the host already installed a global subscriber; keep theirs.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

/// A named handle onto the shared sink.
#[derive(Debug, Clone)]
pub struct Logger {
    name: Arc<str>,
}

impl Logger {
    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both handles came from the same registry entry.
    pub fn same_as(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }

    /// Emit at INFO.
    pub fn info(&self, message: impl Display) {
        tracing::info!(logger = %self.name, "{}", message);
    }

    /// Emit at WARN.
    pub fn warn(&self, message: impl Display) {
        tracing::warn!(logger = %self.name, "{}", message);
    }

    /// Emit at DEBUG.
    pub fn debug(&self, message: impl Display) {
        tracing::debug!(logger = %self.name, "{}", message);
    }
}

/// Get the logger registered under `name`, creating it on first use.
pub fn get_logger(name: &str) -> Logger {
    init(DEFAULT_LEVEL);

    let registry = LOGGERS.get_or_init(Default::default);
    let mut loggers = registry.lock().unwrap_or_else(PoisonError::into_inner);
    loggers
        .entry(name.to_string())
        .or_insert_with(|| Logger {
            name: Arc::from(name),
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_logger() {
        let a = get_logger("Main");
        let b = get_logger("Main");
        assert!(a.same_as(&b));
        assert_eq!(a.name(), "Main");
    }

    #[test]
    fn test_distinct_names_distinct_loggers() {
        let a = get_logger("Spawner");
        let b = get_logger("Evolver");
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init("debug");
        init("not a level [");
        get_logger("Main").info("still logging");
    }
}
