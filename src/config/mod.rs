//! Startup configuration
//!
//! Information Hiding:
//! - Layering of defaults, settings files and `APP__*` variables hidden in `Settings`
//! - Credential lookup order (process environment, then `.env`) hidden in `ApiKey`
//! - Both are resolved once at startup and passed explicitly to constructors

mod credentials;
mod settings;

pub use credentials::{ApiKey, API_KEY_VAR};
pub use settings::{LLMConfig, LoggingConfig, Settings};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set. Please check your .env file.")]
    MissingApiKey,

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("failed to load settings: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("llm.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("llm.model must not be empty")]
    EmptyModel,
}
