//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub accounts: usize,
    pub orders: usize,
}

/// GET /health — returns system health status and session size.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let service = state.service.lock().await;
    let store = service.store();
    Json(HealthResponse {
        status: "ok",
        accounts: store.ledger().len(),
        orders: store.order_count(),
    })
}
