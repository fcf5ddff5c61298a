//! HTTP surface — one command endpoint plus a health check.
//!
//! The transport validates exactly one contract (non-empty command) and
//! relays the orchestrator's string result; everything else is the agent's
//! problem.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::agent::Agent;

/// Request body for `POST /agent/command`.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// Response body: the orchestrator's answer (or contained error string).
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub result: String,
}

/// Errors surfaced as HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("command must be a non-empty string")]
    EmptyCommand,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyCommand => StatusCode::BAD_REQUEST,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Build the application router.
pub fn router(agent: Arc<Agent>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/agent/command", post(execute_command))
        .layer(TraceLayer::new_for_http())
        .with_state(agent)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn execute_command(
    State(agent): State<Arc<Agent>>,
    Json(payload): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    if payload.command.trim().is_empty() {
        return Err(ApiError::EmptyCommand);
    }

    tracing::info!(command = %payload.command, "executing command");
    let result = agent.run(&payload.command).await;

    Ok(Json(CommandResponse { result }))
}
