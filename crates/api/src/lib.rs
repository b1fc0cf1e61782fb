//! HTTP API server with observability for the order lifecycle system.
//!
//! Exposes the order service over REST endpoints, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{OrderService, Store};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::AccountSeed;
use routes::metrics::MetricsState;

/// Shared application state accessible from all handlers.
///
/// The order service sits behind a single lock, so requests touching the
/// same order are applied one at a time.
pub struct AppState {
    pub service: Mutex<OrderService>,
}

impl AppState {
    pub fn new(service: OrderService) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(MetricsState {
            handle: metrics_handle,
            app: state.clone(),
        });

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/accounts", get(routes::accounts::list))
        .route("/accounts", post(routes::accounts::open))
        .route("/orders", get(routes::orders::list))
        .route("/orders", post(routes::orders::create))
        .route("/orders/{id}", get(routes::orders::get))
        .route(
            "/orders/{id}/history",
            get(routes::orders::history).post(routes::orders::perform_history),
        )
        .route("/orders/{id}/{action}", post(routes::orders::perform))
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

/// Creates application state with one account per seed, using wall-clock time.
pub fn create_state(accounts: &[AccountSeed]) -> Arc<AppState> {
    let store = Store::with_accounts(
        accounts
            .iter()
            .map(|seed| (seed.name.clone(), seed.balance)),
    );
    Arc::new(AppState::new(OrderService::with_system_clock(store)))
}
