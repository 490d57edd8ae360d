//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! Secrets are loaded from environment variables, once, at startup.

use std::env;
use std::time::Duration;
use tracing::warn;

/// Stripe API version the request encoding is written against
pub const DEFAULT_API_VERSION: &str = "2024-06-20";

/// Production API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// HTTP client timeout when `STRIPE_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...); empty when unset
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version sent as `Stripe-Version`
    pub api_version: String,

    /// Per-request timeout of the HTTP client
    pub timeout: Duration,
}

impl StripeConfig {
    /// Load configuration from environment variables (`.env` is loaded by the binary).
    ///
    /// Reads:
    /// - `STRIPE_SECRET_KEY` (missing is only a warning)
    /// - `STRIPE_API_VERSION` (default `2024-06-20`)
    /// - `STRIPE_API_BASE_URL` (default `https://api.stripe.com`)
    /// - `STRIPE_TIMEOUT_SECS` (default `30`)
    pub fn from_env() -> Self {
        let secret_key = match env::var("STRIPE_SECRET_KEY") {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => {
                warn!("STRIPE_SECRET_KEY is not set; payment intent requests will be rejected by Stripe");
                String::new()
            }
        };

        let config = Self {
            secret_key,
            api_base_url: env::var("STRIPE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_version: env::var("STRIPE_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            timeout: Duration::from_secs(
                env::var("STRIPE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };

        if config.is_configured() && !config.has_known_key_prefix() {
            warn!("STRIPE_SECRET_KEY does not look like a secret or restricted key (sk_/rk_)");
        }

        config
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check whether a credential is present at all
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_") || self.secret_key.starts_with("rk_live_")
    }

    fn has_known_key_prefix(&self) -> bool {
        self.secret_key.starts_with("sk_") || self.secret_key.starts_with("rk_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: pin a different API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builder: set the HTTP client timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The secret key never goes to logs
impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &if self.is_configured() { "<redacted>" } else { "<unset>" })
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
