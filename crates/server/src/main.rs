//! Catalog Chat Server Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use celubot_config::Settings;
use celubot_core::Catalog;
use celubot_engine::{ChatEngine, RandomPicker};
use celubot_server::{create_router, AppState};
use celubot_session::InMemorySessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first (need the log level for tracing init)
    let config_path =
        std::env::var("CELUBOT_CONFIG").unwrap_or_else(|_| "config/celubot".to_string());
    let config = Settings::load(Some(&config_path))?;

    init_tracing(&config);

    tracing::info!("Starting Catalog Chat Server v{}", env!("CARGO_PKG_VERSION"));

    // The catalog is loaded once; a missing or malformed file is fatal at
    // startup only.
    let raw = std::fs::read(&config.catalog.path)?;
    let catalog = Arc::new(Catalog::from_json(&raw)?);
    tracing::info!(
        path = %config.catalog.path,
        products = catalog.len(),
        "Catalog loaded"
    );

    let store = Arc::new(InMemorySessionStore::new());
    let engine = ChatEngine::new(
        catalog,
        store,
        config.engine.clone(),
        Box::new(RandomPicker),
    );

    let state = AppState::new(config.clone(), engine);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{},tower_http=debug", config.observability.log_level).into()
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
