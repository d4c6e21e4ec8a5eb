use clap::Parser;
use std::path::PathBuf;

/// Running without arguments starts the interactive loop straight away.
#[derive(Debug, Parser)]
#[command(name = "boardroom")]
#[command(author, version, about = "Chat with your CEO and head of marketing", long_about = None)]
pub struct Cli {
    /// Env file consulted when OPENAI_API_KEY is not already set
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Settings file to load instead of config/<CONFIG_ENV>
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}
