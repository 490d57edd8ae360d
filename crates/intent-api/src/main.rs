//! # Intent Gateway
//!
//! Creates Stripe PaymentIntents on behalf of client apps.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export PORT=3000
//!
//! # Run the server
//! intent-gateway
//! ```

use intent_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present, before any config is read
    dotenvy::dotenv().ok();

    // Initialize logging; LOG_FORMAT=json for structured output
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(|| fmt::layer()))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Initialize application state
    let state = AppState::from_env()?;

    let addr = state.config.bind_address();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider_name());
    if state.config.redact_provider_errors {
        info!("Provider error messages are redacted in responses");
    }

    let app = routes::create_router(state);

    info!("Intent gateway starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!("Create intent: POST http://{}/payments/create-payment-intent", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Intent Gateway
  ━━━━━━━━━━━━━━━━━━━━━━━
  Payment intents over Stripe
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
