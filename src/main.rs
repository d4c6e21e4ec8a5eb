use anyhow::{Context, Result};
use boardroom::cli::Cli;
use boardroom::{load_startup, AgentRegistry, InteractiveSession};
use clap::Parser;
use tokio::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let startup = load_startup(&cli.env_file, cli.config.as_deref())
        .context("Failed to load startup configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&startup.settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(model = %startup.settings.llm.model, "Starting boardroom");

    let registry = AgentRegistry::from_config(&startup.api_key, &startup.settings.llm)?;
    let summary = InteractiveSession::new(&registry, BufReader::new(io::stdin()), io::stdout())
        .run()
        .await?;

    tracing::info!("Answered {} of {} turns", summary.turns - summary.failures, summary.turns);
    Ok(())
}
