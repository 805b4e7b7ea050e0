//! Application configuration: `agentnet.toml` plus environment overrides.
//!
//! Load order: the default file if present, then an explicit `--config`
//! file, then `AGENTNET__*` variables (double underscore nests, e.g.
//! `AGENTNET__LOG__LEVEL=debug`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "agentnet.toml";

/// Configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[run]` section
    pub run: RunSection,
    /// `[log]` section
    pub log: LogSection,
}

/// `[run]`: which agents to spawn and where the report goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunSection {
    /// Agent type names, one agent per entry
    pub agent_types: Vec<String>,
    /// Where to write the JSON run report
    pub output: Option<PathBuf>,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            agent_types: vec![agentnet_execution::TASK_AGENT.to_string()],
            output: None,
        }
    }
}

/// `[log]`: sink filter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Filter directive, e.g. `info` or `agentnet_execution=debug`
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: crate::logging::DEFAULT_LEVEL.to_string(),
        }
    }
}

/// Load configuration from disk and the environment.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, ::config::ConfigError> {
    load_config_from(config_path, None)
}

/// Load configuration, reading `AGENTNET__*` overrides from `env` instead of
/// the process environment when given.
pub fn load_config_from(
    config_path: Option<&Path>,
    env: Option<::config::Map<String, String>>,
) -> Result<AppConfig, ::config::ConfigError> {
    let mut builder = ::config::Config::builder();

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        builder = builder.add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false));
    }

    if let Some(path) = config_path {
        builder = builder.add_source(::config::File::from(path.to_path_buf()).required(true));
    }

    builder = builder.add_source(
        ::config::Environment::with_prefix("AGENTNET")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("run.agent_types")
            .try_parsing(true)
            .source(env),
    );

    builder.build()?.try_deserialize()
}

/// External service credentials.
///
/// Read from the environment for the integrations that will use them; the
/// dispatch loop itself never does.
#[derive(Clone, Default)]
pub struct Credentials {
    /// `OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
    /// `SUPABASE_URL`
    pub storage_url: Option<String>,
    /// `SUPABASE_KEY`
    pub storage_key: Option<String>,
    /// `DISCORD_WEBHOOK_URL`
    pub webhook_url: Option<String>,
}

impl Credentials {
    /// Read credentials from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            openai_api_key: get("OPENAI_API_KEY"),
            storage_url: get("SUPABASE_URL"),
            storage_key: get("SUPABASE_KEY"),
            webhook_url: get("DISCORD_WEBHOOK_URL"),
        }
    }

    /// Names of the variables that are set.
    pub fn configured(&self) -> Vec<&'static str> {
        [
            ("OPENAI_API_KEY", &self.openai_api_key),
            ("SUPABASE_URL", &self.storage_url),
            ("SUPABASE_KEY", &self.storage_key),
            ("DISCORD_WEBHOOK_URL", &self.webhook_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("storage_url", &self.storage_url)
            .field("storage_key", &redact(&self.storage_key))
            .field("webhook_url", &redact(&self.webhook_url))
            .finish()
    }
}
