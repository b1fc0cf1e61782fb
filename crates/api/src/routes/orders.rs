//! Order endpoints: placement, queries and lifecycle actions.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{AccountId, OrderId};
use domain::{Action, ActionOutcome, HistoryEntry, Order, OrderDetail, OrderState, OrderSummary};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub account_id: AccountId,
}

// -- Response types --

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionResponse {
    Transitioned {
        state: OrderState,
        entry: HistoryEntry,
    },
    NoOp {
        state: OrderState,
        message: &'static str,
    },
}

// -- Handlers --

/// POST /orders — place a new order for an account.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.service.lock().await.create_order(req.account_id)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders — list orders with owner name and state.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<OrderSummary>> {
    Json(state.service.lock().await.list_orders())
}

/// GET /orders/{id} — order detail.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let detail = state.service.lock().await.order_detail(order_id)?;
    Ok(Json(detail))
}

/// POST /orders/{id}/{action} — run a lifecycle action.
///
/// A request that changes nothing still answers 200 with `outcome: "no_op"`.
#[tracing::instrument(skip(state))]
pub async fn perform(
    State(state): State<Arc<AppState>>,
    Path((id, action)): Path<(String, String)>,
) -> Result<Json<ActionResponse>, ApiError> {
    run_action(&state, &id, &action).await
}

/// POST /orders/{id}/history — shadowed by the history route, rejected like
/// any other unknown action.
#[tracing::instrument(skip(state))]
pub async fn perform_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    run_action(&state, &id, "history").await
}

async fn run_action(
    state: &AppState,
    id: &str,
    action: &str,
) -> Result<Json<ActionResponse>, ApiError> {
    let order_id = parse_order_id(id)?;
    let action: Action = action
        .parse()
        .map_err(|e: domain::ParseActionError| ApiError::BadRequest(e.to_string()))?;

    let mut service = state.service.lock().await;
    let response = match service.perform_action(order_id, action)? {
        ActionOutcome::Transitioned { new_state, entry } => ActionResponse::Transitioned {
            state: new_state,
            entry,
        },
        ActionOutcome::NoOp { message } => ActionResponse::NoOp {
            state: service.get_order(order_id)?.state(),
            message,
        },
    };

    Ok(Json(response))
}

/// GET /orders/{id}/history — transitions recorded for an order, oldest first.
#[tracing::instrument(skip(state))]
pub async fn history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let history = state.service.lock().await.history(order_id)?.to_vec();
    Ok(Json(history))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid order id: {e}")))
}
