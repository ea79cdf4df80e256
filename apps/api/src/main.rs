use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seoscope::config::Config;
use seoscope::extraction::fetcher::HttpPageFetcher;
use seoscope::routes::build_router;
use seoscope::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seoscope v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = HttpPageFetcher::new(
        &config.user_agent,
        Duration::from_secs(config.fetch_timeout_secs),
    )?;
    info!(
        "Page fetcher initialized (timeout: {}s)",
        config.fetch_timeout_secs
    );

    let state = AppState {
        fetcher: Arc::new(fetcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
