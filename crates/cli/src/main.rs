//! AgentNet CLI - spawn agents, dispatch tasks, evolve.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use agentnet_cli::{get_logger, load_config, logging, read_report, write_report, Credentials};
use agentnet_execution::{AgentSpawner, Orchestrator, OrchestratorConfig};
use agentnet_storage::{delete_useless_files, DEFAULT_SWEEP_DIR};

#[derive(Parser)]
#[command(name = "agentnet")]
#[command(about = "Multi-agent task dispatch", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dispatch loop once (default)
    Run {
        /// Write the JSON run report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a saved run report
    Show {
        /// Report file
        report: PathBuf,
    },
    /// Delete *.log files from a folder
    Sweep {
        /// Folder to sweep
        #[arg(long, default_value = DEFAULT_SWEEP_DIR)]
        folder: PathBuf,
    },
    /// List registered agent types
    Agents,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.log.level);
    let log = get_logger("Main");

    let credentials = Credentials::from_env();
    log.debug(format!("Credentials present: {:?}", credentials.configured()));

    match cli.command.unwrap_or(Commands::Run { output: None }) {
        Commands::Run { output } => {
            if config.run.agent_types.is_empty() {
                log.warn("No agent types configured, nothing will be dispatched");
            }

            log.info("Starting run");
            let orchestrator = Orchestrator::new().with_config(
                OrchestratorConfig::default().with_agent_types(config.run.agent_types.clone()),
            );
            let report = orchestrator.run()?;

            for agent in &report.after_evolve.agents {
                log.info(format!(
                    "{}: performance {} after {} assignment(s)",
                    agent.agent,
                    agent.performance,
                    report.assignments.iter().filter(|a| a.agent == agent.agent).count(),
                ));
            }
            log.info(format!(
                "Run {} finished, total performance {}",
                report.run_id,
                report.after_evolve.total_performance(),
            ));

            if let Some(path) = output.or(config.run.output) {
                write_report(&report, &path).await?;
                log.info(format!("Report written to {}", path.display()));
            }
        }
        Commands::Show { report } => {
            let report = read_report(&report).await?;
            println!("Run: {}", report.run_id);
            println!("  Started: {}", report.started_at);
            println!("  Finished: {}", report.finished_at);
            println!("  Assignments: {}", report.assignments.len());
            for record in &report.assignments {
                println!("    {} <- {}: {}", record.agent, record.task, record.outcome);
            }
            println!("  Total performance: {}", report.after_evolve.total_performance());
        }
        Commands::Sweep { folder } => {
            let report = delete_useless_files(&folder).await?;
            println!("Removed {} file(s) from {}", report.removed.len(), folder.display());
            for path in report.removed {
                println!("  {}", path.display());
            }
        }
        Commands::Agents => {
            let spawner = AgentSpawner::default();
            let names = spawner.registry().names();
            println!("Agent types ({}):", names.len());
            for name in names {
                println!("  - {}", name);
            }
        }
    }

    Ok(())
}
