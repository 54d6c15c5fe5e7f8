//! DANG HTTP Server
//!
//! Accepts decision batches over REST, compiles them and persists the result.

use anyhow::Result;
use dang_sdk::DecisionService;
use dang_server::{api, config::ServerConfig, repository_loader};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    let repository = repository_loader::open_repository(&config.repository)?;
    let service = DecisionService::with_options(repository, config.compiler.clone());
    info!("Decision service initialized");

    let app = api::create_router(Arc::new(service));

    // Start server
    let addr = config.address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Decision API: POST http://{}/decisions", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` wins; otherwise the configured level applies to the DANG crates.
fn init_tracing(log_level: &str) -> Result<()> {
    let fallback = format!(
        "dang_server={level},dang_sdk={level},dang_compiler={level},dang_repository={level},tower_http=debug",
        level = log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
