//! Local HTTP host for the fulfillment handler
//!
//! Plays the calling platform during development:
//! the raw invocation event goes in, the dialog response comes out.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::HostConfig;
use crate::dispatch::IntentDispatcher;
use crate::error::BotError;
use crate::handler::{handle_event_with, InvocationContext};

/// =============================
/// Error Envelope
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub request_id: String,
    pub timestamp: String,
}

impl ApiError {
    pub fn new(message: String, context: &InvocationContext) -> Self {
        Self {
            success: false,
            error: message,
            request_id: context.request_id.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn status_for(err: &BotError) -> StatusCode {
    match err {
        BotError::UnsupportedIntent(_) | BotError::MalformedEvent(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub dispatcher: Arc<IntentDispatcher>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Invocation Endpoint
/// =============================

async fn invoke(State(state): State<ApiState>, Json(event): Json<Value>) -> Response {
    let context = InvocationContext::new();

    match handle_event_with(&state.dispatcher, event, &context) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            let status = status_for(&e);
            warn!(request_id = %context.request_id, status = %status, error = %e, "Invocation failed");
            (status, Json(ApiError::new(e.to_string(), &context))).into_response()
        }
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(dispatcher: Arc<IntentDispatcher>) -> Router {
    let state = ApiState { dispatcher };

    Router::new()
        .route("/health", get(health))
        .route("/invoke", post(invoke))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    dispatcher: Arc<IntentDispatcher>,
    config: &HostConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(dispatcher);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API Server listening on http://{}", addr);
    info!("Local: http://127.0.0.1:{}", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
