//! # Application State
//!
//! Shared state for the Axum application: the payment provider and
//! process configuration, both built once at startup.

use intent_core::{BoxedPaymentProvider, PaymentProvider};
use intent_stripe::StripeIntentProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Replace provider error messages with a generic one
    pub redact_provider_errors: bool,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            redact_provider_errors: std::env::var("REDACT_PROVIDER_ERRORS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            redact_provider_errors: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider every intent request is delegated to
    pub provider: BoxedPaymentProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state around an explicit provider
    pub fn new(config: AppConfig, provider: BoxedPaymentProvider) -> Self {
        Self { provider, config }
    }

    /// Create state from the environment, backed by Stripe
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let stripe = StripeIntentProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        let stripe_config = stripe.config();
        tracing::info!(
            "Stripe provider ready: api_version={}, mode={}",
            stripe_config.api_version,
            if stripe_config.is_live_mode() {
                "live"
            } else if stripe_config.is_test_mode() {
                "test"
            } else {
                "unconfigured"
            }
        );

        Ok(Self::new(config, Arc::new(stripe) as BoxedPaymentProvider))
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}
