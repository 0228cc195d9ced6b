//! Auto-reply twin server
//!
//! Exposes the reply engine over HTTP.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use autoreply_agent::AgentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing persona configuration.")]
    MissingConfig,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Detail is logged, never returned to the client
    #[error("Failed to generate response.")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingConfig => StatusCode::BAD_REQUEST,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        err.status_code()
    }
}

impl From<AgentError> for ServerError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Request(autoreply_core::Error::MissingConfig) => ServerError::MissingConfig,
            AgentError::Request(other) => ServerError::InvalidRequest(other.to_string()),
            AgentError::Unavailable(detail) => ServerError::Internal(detail),
        }
    }
}

impl From<autoreply_core::Error> for ServerError {
    fn from(err: autoreply_core::Error) -> Self {
        AgentError::from(err).into()
    }
}

impl From<autoreply_config::ConfigError> for ServerError {
    fn from(err: autoreply_config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Internal(detail) => {
                tracing::error!(error = %detail, "Reply generation failed")
            },
            ServerError::Config(detail) => tracing::error!(error = %detail, "Configuration error"),
            other => tracing::debug!(error = %other, "Rejected request"),
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
