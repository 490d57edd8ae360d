//! # Payment Intent Types
//!
//! Request and result types for payment intent creation, plus the
//! amount validation rule that guards every call to the provider.

use crate::error::{GatewayError, GatewayResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Currency used when the caller does not supply one
pub const DEFAULT_CURRENCY: &str = "usd";

/// Opaque key/value pairs forwarded to the provider as received.
pub type Metadata = Map<String, Value>;

/// A validated request to create a payment intent.
///
/// Only `new` and `from_json` construct one, so `amount` is always > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntentRequest {
    amount: Number,
    currency: String,
    metadata: Option<Metadata>,
}

impl PaymentIntentRequest {
    /// Create a request in the default currency
    pub fn new(amount: i64) -> GatewayResult<Self> {
        if amount <= 0 {
            return Err(invalid_amount());
        }

        Ok(Self {
            amount: Number::from(amount),
            currency: DEFAULT_CURRENCY.to_string(),
            metadata: None,
        })
    }

    /// Builder: set the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validate a raw JSON body.
    ///
    /// `amount` must be a positive number; anything else the provider
    /// may object to (fractions, magnitude) is left for the provider.
    /// `currency` and `metadata` are optional; `null` counts as omitted.
    /// A body that is not an object is treated as one with no `amount`.
    pub fn from_json(body: &Value) -> GatewayResult<Self> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        let amount = parse_amount(fields.get("amount"))?;

        let currency = match fields.get("currency") {
            None | Some(Value::Null) => DEFAULT_CURRENCY.to_string(),
            Some(Value::String(currency)) => currency.clone(),
            Some(_) => return Err(GatewayError::Validation("Invalid currency".to_string())),
        };

        let metadata = match fields.get("metadata") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => return Err(GatewayError::Validation("Invalid metadata".to_string())),
        };

        Ok(Self {
            amount,
            currency,
            metadata,
        })
    }

    /// Amount in the smallest currency unit, as sent by the caller
    pub fn amount(&self) -> &Number {
        &self.amount
    }

    /// Currency code, passed through as given
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Caller metadata, untouched
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Parameters handed to the provider for this request
    pub fn to_params(&self) -> CreateIntentParams {
        CreateIntentParams {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            metadata: self.metadata.clone(),
            automatic_payment_methods: true,
        }
    }
}

fn invalid_amount() -> GatewayError {
    GatewayError::Validation("Invalid amount".to_string())
}

fn parse_amount(value: Option<&Value>) -> GatewayResult<Number> {
    match value {
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n > 0.0) => {
            Ok(number.clone())
        }
        _ => Err(invalid_amount()),
    }
}

/// Successful outcome returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResult {
    /// Provider-issued client secret, untouched
    pub client_secret: String,
}

/// Everything the provider needs to create an intent
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIntentParams {
    pub amount: Number,
    pub currency: String,
    pub metadata: Option<Metadata>,
    /// Let the provider pick eligible payment methods
    pub automatic_payment_methods: bool,
}

impl CreateIntentParams {
    /// Amount as wire text.
    ///
    /// Whole-valued floats (`1000.0`) are written as integers; every
    /// other number keeps its own text for the provider to judge.
    pub fn amount_text(&self) -> String {
        if self.amount.is_f64() {
            if let Some(amount) = self.amount.as_f64() {
                if amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0 {
                    return (amount as i64).to_string();
                }
            }
        }
        self.amount.to_string()
    }
}

/// Payment intent as created by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderIntent {
    /// Provider-side intent ID (e.g. `pi_...`)
    pub id: String,

    /// Secret the client SDK uses to confirm the payment
    pub client_secret: String,

    /// Provider status, e.g. `requires_payment_method`
    pub status: Option<String>,

    /// When the provider created the intent
    pub created_at: Option<DateTime<Utc>>,
}

impl ProviderIntent {
    /// Strip the intent down to what the caller receives
    pub fn into_result(self) -> PaymentIntentResult {
        PaymentIntentResult {
            client_secret: self.client_secret,
        }
    }
}
