//! Configuration management for the auto-reply twin
//!
//! Supports loading configuration from:
//! - YAML/TOML/JSON files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (`AUTOREPLY__` prefix, `__` separator)
//! - A persona file (YAML, TOML or JSON) named by `persona_path`

pub mod persona;
pub mod settings;

pub use persona::load_persona;
pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<autoreply_core::Error> for ConfigError {
    fn from(err: autoreply_core::Error) -> Self {
        match err {
            autoreply_core::Error::InvalidPersona { field, message } => ConfigError::InvalidValue {
                field: format!("persona.{}", field),
                message,
            },
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
