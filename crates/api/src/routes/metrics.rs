//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use domain::OrderState;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::AppState;

/// State for the metrics route.
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub app: Arc<AppState>,
}

/// GET /metrics — refreshes per-state order gauges and returns
/// Prometheus-formatted metrics.
pub async fn get(State(state): State<MetricsState>) -> impl IntoResponse {
    {
        let service = state.app.service.lock().await;
        for order_state in OrderState::ALL {
            let count = service
                .store()
                .orders()
                .filter(|order| order.state() == order_state)
                .count();
            metrics::gauge!("orders_by_state", "state" => order_state.as_str()).set(count as f64);
        }
    }

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        state.handle.render(),
    )
}
