//! Path Finder server
//!
//! Serves the decision journal analytics over HTTP. Configuration comes
//! from `PATH_FINDER__*` environment variables (see `config`).

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use path_finder::adapters::http::{create_router, PathFinderAppState};
use path_finder::adapters::source::source_from_config;
use path_finder::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        source = ?config.source.kind,
        "Starting Path Finder"
    );

    let source = source_from_config(&config.source)?;
    let app = create_router(PathFinderAppState::new(source), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
