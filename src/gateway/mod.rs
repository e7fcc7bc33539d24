//! HTTP gateway (Axum) for catalog recommendations.
//!
//! Routes:
//! - `GET /recommend?query=..&top_n=..` - ranked catalog items
//! - `GET /healthz` - liveness
//! - `GET /ready` - readiness (catalog loaded)

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::recommend_handler;
pub use payload::Recommendation;
pub use state::HandlerState;

use crate::constants::{STATUS_OK, STATUS_PENDING};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/recommend", get(recommend_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub catalog_items: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: STATUS_OK })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let catalog_items = state.recommender.catalog().len();
    let (status_code, status) = if catalog_items > 0 {
        (StatusCode::OK, STATUS_OK)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, STATUS_PENDING)
    };

    (
        status_code,
        Json(ReadyResponse {
            status,
            catalog_items,
        }),
    )
        .into_response()
}
