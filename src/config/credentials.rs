use super::ConfigError;
use std::env;
use std::fmt;
use std::path::Path;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Chat-completion credential, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Resolve from the process environment, falling back to `env_file`.
    ///
    /// The file is read without touching the process environment. A variable
    /// already present in the environment wins over the file, even when empty.
    pub fn resolve(env_file: &Path) -> Result<Self, ConfigError> {
        Self::from_sources(env::var(API_KEY_VAR).ok(), env_file)
    }

    pub fn from_sources(process_value: Option<String>, env_file: &Path) -> Result<Self, ConfigError> {
        let value = match process_value {
            Some(value) => Some(value),
            None => read_env_file(env_file)?,
        };

        match value {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

fn read_env_file(path: &Path) -> Result<Option<String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    };

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => {
            tracing::debug!("No env file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(to_error(e)),
    };

    let mut found = None;
    for entry in entries {
        let (key, value) = entry.map_err(to_error)?;
        if key == API_KEY_VAR {
            found = Some(value);
        }
    }
    Ok(found)
}
