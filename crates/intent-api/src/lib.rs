//! # intent-api
//!
//! HTTP API layer for intent-gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment intent endpoint, backed by an injected `PaymentProvider`
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/payments/create-payment-intent` | Create payment intent, returns `clientSecret` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
