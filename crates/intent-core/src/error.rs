//! # Gateway Error Types
//!
//! Typed error handling for the payment intent gateway.
//! Every operation returns `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Malformed or missing input; never reaches the provider
    #[error("{0}")]
    Validation(String),

    /// Failure reported by (or while reaching) the payment provider.
    ///
    /// Displays as the provider's own message, unchanged.
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Configuration errors (HTTP client construction, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Shorthand for a provider failure
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        GatewayError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns true if the provider was contacted (or attempted)
    pub fn is_provider_error(&self) -> bool {
        matches!(self, GatewayError::Provider { .. })
    }

    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Provider failures are reported as client errors, same as validation.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            GatewayError::Provider { .. } => 400,
            GatewayError::Configuration(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
