//! Evolution layer - agent evaluation and memory trimming.

#![warn(missing_docs, unused_crate_dependencies)]

mod optimizer;
mod evolver;
mod metrics;

pub use optimizer::AgentOptimizer;
pub use evolver::SystemEvolver;
pub use metrics::{AgentMetrics, SystemMetrics};
