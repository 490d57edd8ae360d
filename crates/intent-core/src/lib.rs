//! # intent-core
//!
//! Core types and traits for the intent-gateway payment service.
//!
//! This crate provides:
//! - `PaymentIntentRequest` and its validation (the one business rule we own)
//! - `PaymentIntentResult`, the client secret handed back to callers
//! - `PaymentProvider` trait for plugging in a payment processor
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use intent_core::{PaymentIntentRequest, PaymentProvider};
//!
//! let request = PaymentIntentRequest::from_json(&body)?;
//! let intent = provider.create_intent(&request.to_params()).await?;
//!
//! // Hand intent.client_secret to the client-side SDK
//! ```

pub mod error;
pub mod intent;
pub mod provider;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use intent::{
    CreateIntentParams, Metadata, PaymentIntentRequest, PaymentIntentResult, ProviderIntent,
    DEFAULT_CURRENCY,
};
pub use provider::{BoxedPaymentProvider, PaymentProvider};
