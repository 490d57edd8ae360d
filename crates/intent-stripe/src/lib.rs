//! # intent-stripe
//!
//! Stripe payment intent provider for intent-gateway.
//!
//! Creates PaymentIntents through Stripe's REST API with automatic payment
//! methods enabled, and hands back the client secret for the client-side SDK.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intent_core::{PaymentIntentRequest, PaymentProvider};
//! use intent_stripe::StripeIntentProvider;
//!
//! // Create provider from environment
//! let provider = StripeIntentProvider::from_env()?;
//!
//! let request = PaymentIntentRequest::new(1000)?;
//! let intent = provider.create_intent(&request.to_params()).await?;
//!
//! // Send intent.client_secret to the browser / mobile app
//! ```

pub mod config;
pub mod intents;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripeIntentProvider;
