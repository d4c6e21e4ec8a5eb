use super::ConfigError;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LLMConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Unset means the HTTP client's own default (no timeout).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Defaults, then `config/<CONFIG_ENV>` if present, then `APP__*` variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::load(File::with_name(&format!("config/{}", config_env)).required(false))
    }

    /// Load an explicit settings file over the defaults. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load(File::from(path).required(true))
    }

    fn load<S>(file: S) -> Result<Self, ConfigError>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("llm.temperature", DEFAULT_TEMPERATURE)?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("logging.level", "warn")?
            .add_source(file)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidTemperature(self.llm.temperature));
        }
        Ok(())
    }
}
