//! HTTP Endpoints
//!
//! REST API for the catalog chatbot.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Chat endpoint, path kept compatible with the storefront widget
        .route("/chatbot/api/chat/", post(chat))
        // Health check
        .route("/health", get(health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub options: Vec<String>,
    pub session_id: String,
}

/// Handle one chat message
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Por favor, cuéntame qué celular o características estás buscando"
            })),
        )
            .into_response();
    }

    // mint a session id for first-time callers and echo it back
    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::debug!(%session_id, "chat message received");
    let reply = state.engine.handle_message(&session_id, &request.message);

    Json(ChatResponse {
        response: reply.text,
        options: reply.options,
        session_id,
    })
    .into_response()
}

/// Liveness probe
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
