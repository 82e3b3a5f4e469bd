use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ats_analyzer::config::Config;
use ats_analyzer::routes::build_router;
use ats_analyzer::state::AppState;
use ats_analyzer::Analyzer;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("ats_analyzer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Tables are built once and shared read-only by every request
    let analyzer_config = config.load_analyzer_config()?;
    match &config.analyzer_config {
        Some(path) => info!("Analyzer tables loaded from {}", path.display()),
        None => info!("Analyzer tables: built-in defaults"),
    }
    let analyzer = Arc::new(Analyzer::new(analyzer_config)?);

    let state = AppState {
        config: config.clone(),
        analyzer,
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
