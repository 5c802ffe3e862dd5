//! TalentLink — campaign marketplace connecting founders and talents.
//!
//! Main entry point that wires the stores and starts the API server.

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use talentlink_core::config::AppConfig;
use talentlink_marketplace::{
    marketplace_router, ApplicationEngine, MarketplaceState, MarketplaceStore,
};
use talentlink_media::{InMemoryObjectStore, MediaService};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "talentlink")]
#[command(about = "Campaign marketplace connecting founders and talents")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "TALENTLINK__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "TALENTLINK__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Seed demo founders, talents, and campaigns on startup
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talentlink=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("TalentLink starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if cli.seed_demo {
        config.marketplace.seed_demo = true;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        seed_demo = config.marketplace.seed_demo,
        "Configuration loaded"
    );

    // Wire stores and services
    let store = Arc::new(MarketplaceStore::new());
    if config.marketplace.seed_demo {
        store.seed_demo_data();
        info!("Demo data seeded");
    }
    let engine = Arc::new(ApplicationEngine::new(store.clone()));
    let media = Arc::new(MediaService::new(
        Arc::new(InMemoryObjectStore::new(config.media.cdn_base_url.clone())),
        config.media.max_upload_bytes,
    ));

    let state = MarketplaceState {
        store,
        engine,
        media,
    };

    // Start metrics exporter
    if let Err(e) = start_metrics(&config) {
        error!(error = %e, "Failed to start metrics exporter");
    }

    let app = marketplace_router(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.api.host.parse()?, config.api.http_port);

    info!(addr = %addr, "TalentLink is ready to serve traffic");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Start the Prometheus exporter on a separate port.
fn start_metrics(config: &AppConfig) -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .with_http_listener(SocketAddr::new(
            config.api.host.parse()?,
            config.metrics.port,
        ))
        .install_recorder()?;

    info!(port = config.metrics.port, "Metrics exporter started");

    // Keep the handle alive
    std::mem::forget(handle);
    Ok(())
}
