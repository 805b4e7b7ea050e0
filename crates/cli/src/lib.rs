//! AgentNet command-line support: configuration, named loggers and run
//! report files.

#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod report;

pub use crate::config::{load_config, load_config_from, AppConfig, Credentials, LogSection, RunSection};
pub use crate::logging::{get_logger, Logger};
pub use crate::report::{read_report, write_report};
