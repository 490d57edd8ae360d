//! # Routes
//!
//! Axum router configuration for the payment intent API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /payments/create-payment-intent - Create payment intent
pub fn create_router(state: AppState) -> Router {
    // Callers are browser and mobile clients on arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let payment_routes = Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/payments", payment_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
