use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::{config::Settings, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load settings first so the log level can fall back to the configured one
    let settings = Settings::load().or_else(|_| Settings::load_from("./config/default.toml"))?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = settings.bind_addr;
    let state = Arc::new(AppState::new(settings)?);
    let app = router::create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
