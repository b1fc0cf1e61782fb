//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, LedgerError, OrderError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Domain logic error.
    Domain(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(err) => (domain_error_status(&err), err.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Ledger(ledger_err) => match ledger_err {
            LedgerError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            LedgerError::InsufficientFunds { .. } | LedgerError::BalanceOverflow { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        },
        DomainError::Order(OrderError::InvalidTransition { .. }) => StatusCode::CONFLICT,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{AccountId, OrderId};
    use domain::{Action, Money, OrderState};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DomainError::OrderNotFound {
                    order_id: OrderId::new(1),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                LedgerError::AccountNotFound {
                    account_id: AccountId::new(1),
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (
                LedgerError::InsufficientFunds {
                    account_id: AccountId::new(1),
                    required: Money::new(100),
                    available: Money::new(50),
                }
                .into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                OrderError::InvalidTransition {
                    current_state: OrderState::Created,
                    action: Action::Ship,
                    reason: "cannot ship unpaid order",
                }
                .into(),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(domain_error_status(&err), status, "{err}");
        }
    }
}
