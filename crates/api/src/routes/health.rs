//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use store::ItemStore;

use super::items::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u64>,
}

/// GET /health — reports whether the item store answers queries.
pub async fn check<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.context.store().count().await {
        Ok(items) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                items: Some(items),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    items: None,
                }),
            )
        }
    }
}
