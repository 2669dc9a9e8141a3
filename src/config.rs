//! Environment-driven application configuration

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the Generative Language API credential
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Errors raised while loading configuration at startup
///
/// Any of these is fatal: the process must not serve traffic without a
/// valid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found. Please set it in your environment or .env file.")]
    MissingApiKey(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration, loaded once at process start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the Generative Language API
    pub api_key: String,
    /// Directory holding transient upload files
    pub upload_dir: PathBuf,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is absent or empty, or if `PORT` is
    /// set to something that does not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_VAR));
        }

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            Err(_) => 8000,
        };

        Ok(Self {
            api_key,
            upload_dir: PathBuf::from(upload_dir),
            port,
        })
    }
}
