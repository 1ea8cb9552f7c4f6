//! HTTP API for the item service.
//!
//! Provides REST endpoints for creating and fetching items, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{EventPublisher, LogItemCreated};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{ItemStore, StoreContext};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::items::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ItemStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/items", post(routes::items::create::<S>))
        .route("/items/", post(routes::items::create::<S>))
        .route("/items/{id}", get(routes::items::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the publisher with the handlers the service runs in production.
pub fn default_publisher() -> EventPublisher {
    EventPublisher::builder()
        .on_item_created(LogItemCreated)
        .build()
}

/// Creates the default application state around `store`.
pub fn create_default_state<S: ItemStore + 'static>(store: S) -> Arc<AppState<S>> {
    create_state(store, default_publisher())
}

/// Creates application state around `store` with a custom publisher.
pub fn create_state<S: ItemStore + 'static>(store: S, publisher: EventPublisher) -> Arc<AppState<S>> {
    Arc::new(AppState {
        context: StoreContext::new(store, Arc::new(publisher)),
    })
}
