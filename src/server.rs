//! HTTP surface: health probes and the extraction endpoint.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::error::ExtractionError;
use crate::extract::CaseExtractor;
use crate::extract::types::ExtractionRequest;

/// Service name reported by the health probes.
pub const SERVICE_NAME: &str = "LLM Gateway Service";

const CAPABILITIES: [&str; 3] = [
    "email_extraction",
    "mock_llm_processing",
    "structured_output",
];

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn CaseExtractor>,
}

/// Wire shape for 400/500 responses on the extraction endpoint.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    call_id: i64,
}

/// Build the Axum router with health and extraction routes.
///
/// CORS is wide open: the gateway sits behind callers we don't control.
pub fn routes(extractor: Arc<dyn CaseExtractor>) -> Router {
    let state = AppState { extractor };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/extract_email_info", post(extract_email_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until shutdown.
pub async fn run(config: &GatewayConfig, extractor: Arc<dyn CaseExtractor>) -> crate::error::Result<()> {
    let app = routes(extractor);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "LLM gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Health ──────────────────────────────────────────────────────────────

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": SERVICE_NAME,
        "status": "running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "capabilities": CAPABILITIES,
    }))
}

// ── Extraction ──────────────────────────────────────────────────────────

async fn extract_email_info(
    State(state): State<AppState>,
    Json(request): Json<ExtractionRequest>,
) -> Response {
    info!(call_id = request.call_id, "Processing extraction request");

    if request.email_body.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            ExtractionError::EmptyBody.to_string(),
            request.call_id,
        );
    }

    match state.extractor.extract(&request.email_body).await {
        Ok(extraction) => {
            info!(
                call_id = request.call_id,
                allegations = extraction.allegations.len(),
                entities = extraction.entities.len(),
                "Extraction complete"
            );
            (StatusCode::OK, Json(extraction)).into_response()
        }
        Err(e) => {
            // The cause stays in the logs; clients get a generic message.
            error!(call_id = request.call_id, error = %e, "Extraction failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "LLM processing failed".to_string(),
                request.call_id,
            )
        }
    }
}

fn error_response(
    status: StatusCode,
    code: &'static str,
    message: String,
    call_id: i64,
) -> Response {
    (
        status,
        Json(ErrorBody {
            error: code,
            message,
            call_id,
        }),
    )
        .into_response()
}
