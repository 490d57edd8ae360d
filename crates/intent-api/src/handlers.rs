//! # Request Handlers
//!
//! Axum request handlers for the payment intent API.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use intent_core::{GatewayError, PaymentIntentRequest, PaymentIntentResult};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

/// Message sent instead of the provider's own when redaction is on
pub const REDACTED_PROVIDER_MESSAGE: &str = "Payment provider request failed";

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Handler error; the single place a `GatewayError` becomes HTTP
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

fn redact(err: GatewayError) -> GatewayError {
    match err {
        GatewayError::Provider { provider, .. } => {
            GatewayError::provider(provider, REDACTED_PROVIDER_MESSAGE)
        }
        other => other,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create a payment intent and return its client secret
#[instrument(skip(state, payload), fields(provider = state.provider_name()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PaymentIntentResult>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        GatewayError::Validation(rejection.body_text())
    })?;

    let request = PaymentIntentRequest::from_json(&body).map_err(|e| {
        warn!("Invalid payment intent request: {}", e);
        e
    })?;

    info!(
        "Creating payment intent: amount={}, currency={}",
        request.amount(),
        request.currency()
    );

    let intent = state
        .provider
        .create_intent(&request.to_params())
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            if state.config.redact_provider_errors {
                redact(e)
            } else {
                e
            }
        })?;

    info!("Created payment intent: {}", intent.id);

    Ok(Json(intent.into_result()))
}
