// 🌐 Receipt API - routes, handlers and error responses
//
// POST /receipts/process     -> { "id": ... }
// GET  /receipts/:id/points  -> { "points": ... }
// GET  /health               -> { "status": "ok" }

use crate::error::ReceiptError;
use crate::receipt::ReceiptPayload;
use crate::store::ReceiptStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id.";

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        AppState { store }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// Body could not be read as a receipt (bad JSON, wrong content type...).
    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Receipt(ReceiptError::Validation(err)) => {
                warn!(field = err.field(), error = %err, "rejected receipt");
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response()
            }
            ApiError::Receipt(ReceiptError::NotFound(id)) => {
                info!(%id, "unknown receipt id");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            ApiError::Body(rejection) => {
                warn!(error = %rejection, "unreadable receipt body");
                (
                    rejection.status(),
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(%message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// API Handlers
// ============================================================================

/// POST /receipts/process - Score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(payload) = payload?;
    let id = state.store.process(payload)?;

    info!(%id, "receipt processed");
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// GET /receipts/:id/points - Points awarded to a stored receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let scored = state.store.lookup_str(&id)?;
    Ok(Json(PointsResponse {
        points: scored.points,
    }))
}

/// GET /health - Liveness check
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Turns a handler panic into the generic 500 `{ "error": ... }` body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected server error".to_string()
    };

    ApiError::Internal(message).into_response()
}

pub fn router(state: AppState) -> Router {
    let receipt_routes = Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points));

    Router::new()
        .route("/health", get(health_check))
        .nest("/receipts", receipt_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================
