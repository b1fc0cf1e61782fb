//! Account listing and registration endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{Account, LedgerError, Money};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

#[derive(Deserialize)]
pub struct OpenAccountRequest {
    pub name: String,
    pub balance: u64,
}

/// GET /accounts — list all accounts with their balances.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Account>> {
    let service = state.service.lock().await;
    Json(service.list_accounts().cloned().collect())
}

/// POST /accounts — open a new account.
#[tracing::instrument(skip(state, req))]
pub async fn open(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<OpenAccountRequest>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Account name is required".to_string()));
    }

    let mut service = state.service.lock().await;
    let account_id = service.open_account(name, Money::new(req.balance));
    let account = service
        .store()
        .ledger()
        .get(account_id)
        .cloned()
        .ok_or(LedgerError::AccountNotFound { account_id })
        .map_err(|e| ApiError::Domain(e.into()))?;

    Ok((StatusCode::CREATED, Json(account)))
}
