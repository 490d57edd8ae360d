//! # Payment Provider Trait
//!
//! The capability boundary between the gateway and the external payment
//! processor. The gateway owns validation; everything past this trait
//! (authorization, idempotency, fraud checks) belongs to the provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │          PaymentProvider (trait)            │
//! │  ├── create_intent()                        │
//! │  └── provider_name()                        │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐        ┌───────┴────────┐
//!  │  StripeIntent  │        │  test fakes    │
//!  │   Provider     │        │                │
//!  └────────────────┘        └────────────────┘
//! ```

use crate::error::GatewayResult;
use crate::intent::{CreateIntentParams, ProviderIntent};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment processor able to create payment intents.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent.
    ///
    /// Called at most once per gateway request and never retried.
    /// Any failure comes back as `GatewayError::Provider`.
    async fn create_intent(&self, params: &CreateIntentParams) -> GatewayResult<ProviderIntent>;

    /// Get the provider name (for logging and error attribution).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::intent::PaymentIntentRequest;

    struct EchoProvider;

    #[async_trait]
    impl PaymentProvider for EchoProvider {
        async fn create_intent(
            &self,
            params: &CreateIntentParams,
        ) -> GatewayResult<ProviderIntent> {
            if params.currency != "usd" {
                return Err(GatewayError::provider("echo", "unsupported currency"));
            }
            Ok(ProviderIntent {
                id: format!("pi_{}", params.amount),
                client_secret: format!("pi_{}_secret", params.amount),
                status: None,
                created_at: None,
            })
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_boxed_provider_dispatch() {
        let provider: BoxedPaymentProvider = Arc::new(EchoProvider);
        let params = PaymentIntentRequest::new(700).unwrap().to_params();

        let intent = provider.create_intent(&params).await.unwrap();
        assert_eq!(intent.client_secret, "pi_700_secret");
        assert_eq!(provider.provider_name(), "echo");

        let params = PaymentIntentRequest::new(700).unwrap().with_currency("eur").to_params();
        let err = provider.create_intent(&params).await.unwrap_err();
        assert_eq!(err.to_string(), "unsupported currency");
    }
}
