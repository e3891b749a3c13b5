use anyhow::{Context, Result};
use hotel_booking_backend::api::{router, AppState};
use hotel_booking_backend::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting hotel quote API server...");

    let config = Config::from_env()?;
    info!(
        "Hotel API at {}, guest fee {} per guest per night",
        config.hotel_api_base, config.guest_fee_per_night
    );

    let state = AppState::from_config(&config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Server running on http://{}", config.server_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
