//! # Stripe Payment Intents
//!
//! Implementation of the Stripe PaymentIntents API (`POST /v1/payment_intents`).

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use intent_core::{
    CreateIntentParams, GatewayError, GatewayResult, PaymentProvider, ProviderIntent,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe PaymentIntent provider
///
/// Holds one pooled HTTP client for the lifetime of the process.
pub struct StripeIntentProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeIntentProvider {
    /// Create a new Stripe provider
    pub fn new(config: StripeConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(StripeConfig::from_env())
    }

    /// Configuration this provider was built with
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Build form data for the Stripe API
    fn build_form_params(params: &CreateIntentParams) -> Vec<(String, String)> {
        let mut form_params: Vec<(String, String)> = vec![
            ("amount".to_string(), params.amount_text()),
            ("currency".to_string(), params.currency.clone()),
        ];

        if let Some(ref metadata) = params.metadata {
            for (key, value) in metadata {
                push_form_value(&mut form_params, format!("metadata[{}]", key), value);
            }
        }

        if params.automatic_payment_methods {
            form_params.push((
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ));
        }

        form_params
    }

    fn provider_error(message: impl Into<String>) -> GatewayError {
        GatewayError::provider(PROVIDER, message)
    }
}

#[async_trait]
impl PaymentProvider for StripeIntentProvider {
    #[instrument(skip(self, params), fields(amount = %params.amount, currency = %params.currency))]
    async fn create_intent(&self, params: &CreateIntentParams) -> GatewayResult<ProviderIntent> {
        let form_params = Self::build_form_params(params);
        let idempotency_key = uuid::Uuid::new_v4().to_string();

        debug!(
            "Creating Stripe payment intent: {} form fields, idempotency_key={}",
            form_params.len(),
            idempotency_key
        );

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| {
                error!("Stripe request failed: {}", e);
                Self::provider_error(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Self::provider_error(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(Self::provider_error(error_response.error.message));
            }

            return Err(Self::provider_error(format!("HTTP {}: {}", status, body)));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            Self::provider_error(format!("Failed to parse Stripe response: {}", e))
        })?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| Self::provider_error("Provider response missing client_secret"))?;

        info!(
            "Created Stripe payment intent: id={}, status={}",
            intent.id,
            intent.status.as_deref().unwrap_or("unknown")
        );

        Ok(ProviderIntent {
            id: intent.id,
            client_secret,
            status: intent.status,
            created_at: intent.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Bracket-encode a JSON value the way Stripe's form API expects.
///
/// `null` becomes an empty value; nested objects and arrays expand into
/// `key[sub]` / `key[i]` fields and are left for Stripe to accept or reject.
fn push_form_value(form_params: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => form_params.push((key, String::new())),
        Value::String(s) => form_params.push((key, s.clone())),
        Value::Bool(_) | Value::Number(_) => form_params.push((key, value.to_string())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                push_form_value(form_params, format!("{}[{}]", key, i), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_form_value(form_params, format!("{}[{}]", key, sub), item);
            }
        }
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
