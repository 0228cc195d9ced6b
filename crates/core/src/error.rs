//! Error types shared across the workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request carried no persona configuration
    #[error("Missing persona configuration.")]
    MissingConfig,

    /// Tone label outside the preset set
    #[error("Unknown tone preset: {0}")]
    UnknownTone(String),

    /// Author label other than contact/agent
    #[error("Unknown message author: {0}")]
    UnknownAuthor(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidPersona { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
