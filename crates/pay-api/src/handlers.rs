//! # Request Handlers
//!
//! Axum request handlers for the relay API.
//! Gateway bodies are relayed unchanged; failures use a fixed
//! `{error, details}` shape.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{Amount, PaymentError, TRANSACTION_NOT_FOUND};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Liveness text served at `/`
pub const LIVENESS_MESSAGE: &str = "Server is running...";

/// `error` field of a failed initiation
pub const PAYMENT_FAILED: &str = "Payment initiation failed";

/// `error` field of a failed status check
pub const STATUS_FAILED: &str = "Checking payment status failed";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Initiate payment request
#[derive(Debug, Deserialize)]
pub struct InitiatePaymentRequest {
    /// Amount in the major currency unit
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Validation errors carry their own message; everything else is reported
/// under `context` with the underlying message as `details`.
fn payment_error_to_response(context: &str, err: PaymentError) -> ApiError {
    match err {
        PaymentError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
        }
        other => (
            StatusCode::from_u16(other.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(ErrorResponse::new(context).with_details(other.message())),
        ),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness endpoint
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paypage-relay",
        "provider": state.gateway.provider_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Initiate a Pay Page payment and relay the gateway response
#[instrument(skip_all)]
pub async fn initiate_payment(
    State(state): State<AppState>,
    payload: Result<Json<InitiatePaymentRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let requested = match payload {
        Ok(Json(request)) => request.amount,
        Err(rejection) => {
            info!("Unreadable payment request body: {}", rejection);
            None
        }
    };

    info!(amount = ?requested, "Payment requested");

    let amount = Amount::required(requested)
        .map_err(|e| payment_error_to_response(PAYMENT_FAILED, e))?;

    let body = state.gateway.initiate_payment(amount).await.map_err(|e| {
        error!("Error during payment initiation: {}", e);
        payment_error_to_response(PAYMENT_FAILED, e)
    })?;

    Ok(Json(body))
}

/// Check a transaction's status and relay the gateway response
#[instrument(skip(state))]
pub async fn check_status(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let body = state
        .gateway
        .check_status(&transaction_id)
        .await
        .map_err(|e| {
            error!("Error during checking payment status: {}", e);
            payment_error_to_response(STATUS_FAILED, e)
        })?;

    Ok(Json(body))
}

/// Status route hit without a transaction id
pub async fn check_status_missing() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(TRANSACTION_NOT_FOUND)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error");
        assert_eq!(err.error, "Test error");
        assert!(err.details.is_none());

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Test error" }));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err = PaymentError::Validation("Amount is required".to_string());
        let (status, Json(body)) = payment_error_to_response(PAYMENT_FAILED, err);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Amount is required");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_gateway_error_conversion() {
        let err = PaymentError::Gateway {
            status: 401,
            message: "Request failed with status code 401".to_string(),
        };
        let (status, Json(body)) = payment_error_to_response(STATUS_FAILED, err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, STATUS_FAILED);
        assert_eq!(
            body.details.as_deref(),
            Some("Request failed with status code 401")
        );
    }
}
