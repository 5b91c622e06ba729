use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_SEED_RATE_FILE: &str = "rates/seed_rates.json";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a port number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("SEED_RATE_FILE must not be empty")]
    EmptySeedPath,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub seed_rate_file: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let seed_rate_file = lookup("SEED_RATE_FILE").unwrap_or_else(|| DEFAULT_SEED_RATE_FILE.to_string());
        if seed_rate_file.trim().is_empty() {
            return Err(ConfigError::EmptySeedPath);
        }

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            port,
            seed_rate_file: PathBuf::from(seed_rate_file),
            log_level,
        })
    }
}
