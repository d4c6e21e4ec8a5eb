//! Boardroom - chat with LLM-backed executive personas
//!
//! A line of the form `Agent: message` is routed to the named persona,
//! which forwards it with its fixed system prompt to a chat-completion API
//! and prints the reply.

pub mod agents;
pub mod cli;
pub mod config;
pub mod core;
pub mod repl;
pub mod utils;

pub use self::agents::{Agent, AgentRegistry, Persona, PersonaId};
pub use self::config::{ApiKey, ConfigError, Settings};
pub use self::core::llm::{ChatCompletion, LLMClient, LlmError};
pub use self::repl::{InteractiveSession, SessionSummary};

use std::path::Path;

/// Everything resolved before the first prompt.
#[derive(Debug)]
pub struct Startup {
    pub settings: Settings,
    pub api_key: ApiKey,
}

/// Load settings and the credential. Any error here is fatal.
pub fn load_startup(env_file: &Path, config_file: Option<&Path>) -> Result<Startup, ConfigError> {
    let settings = match config_file {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    let api_key = ApiKey::resolve(env_file)?;
    Ok(Startup { settings, api_key })
}
