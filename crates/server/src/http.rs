//! HTTP Endpoints
//!
//! REST API for reply generation and persona defaults.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use autoreply_core::{PersonaConfig, ReplyRequest, ReplyResult};

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.get_config();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config); // Release lock before building router

    Router::new()
        .route("/api/respond", post(respond))
        .route("/api/persona/default", get(default_persona))
        .route("/admin/reload-persona", post(reload_persona))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, allowing any origin");
        return CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(methods)
            .allow_headers(CorsAny);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, allowing any origin");
        return CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(methods)
            .allow_headers(CorsAny);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods(methods)
        .allow_headers(CorsAny)
}

/// Generate a reply
async fn respond(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<ReplyResult>, ServerError> {
    let Json(request) =
        payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;
    let (config, message, history) = request.into_parts()?;

    let result = state.responder.respond(&config, &message, &history)?;

    tracing::info!(
        tone = %result.meta.mood,
        intents = result.meta.matched_intents.len(),
        escalation = result.meta.escalation_triggered,
        history = history.len(),
        "Reply generated"
    );

    Ok(Json(result))
}

/// Default persona for new clients
async fn default_persona(State(state): State<AppState>) -> Json<PersonaConfig> {
    Json(state.get_default_persona())
}

/// Re-read the persona file named in the settings
async fn reload_persona(State(state): State<AppState>) -> Result<Json<PersonaConfig>, ServerError> {
    Ok(Json(state.reload_persona()?))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let environment = state.get_config().environment.as_str();
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": environment,
    }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": ServerError::Internal(detail).to_string() })),
    )
        .into_response()
}
