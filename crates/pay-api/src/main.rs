//! # PayPage Relay RS
//!
//! Signed relay between client apps and the PhonePe Pay Page API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export MERCHANT_ID=PGTESTPAYUAT
//! export BASE_URL=https://api-preprod.phonepe.com/apis/pg-sandbox
//! export SALT_KEY=...
//!
//! # Run the server
//! pay-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Server is running on http://{}", addr);

    if !is_prod {
        info!("Payment: POST http://{}/api/payment", addr);
        info!("Status: GET http://{}/api/check/{{mtid}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  PayPage Relay RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Signed gateway relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
