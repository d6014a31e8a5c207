use std::env;

use thiserror::Error;

/// Environment variable holding the Gemini credential.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY not found. Set it in your environment or .env file, or pass --api-key")]
    MissingApiKey,
}

/// Process-wide configuration, resolved once at startup before any request
/// is served.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
}

impl Config {
    pub fn new(google_api_key: String) -> Result<Self, ConfigError> {
        if google_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self { google_api_key })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(key)
    }
}
