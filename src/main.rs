// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use airguard_dashboard::application::alert_service::AlertService;
use airguard_dashboard::application::forecast_service::ForecastService;
use airguard_dashboard::application::map_service::MapService;
use airguard_dashboard::application::realtime_service::RealTimeService;
use airguard_dashboard::application::site_service::SiteService;
use airguard_dashboard::infrastructure::config::load_dashboard_config;
use airguard_dashboard::infrastructure::static_repository::StaticRepository;
use airguard_dashboard::presentation::app_state::AppState;
use airguard_dashboard::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(StaticRepository::new(config.site.location.clone()));

    // Create services (application layer)
    let state = Arc::new(AppState {
        site_service: SiteService::new(repository.clone()),
        realtime_service: RealTimeService::new(repository.clone()),
        forecast_service: ForecastService::new(
            config.site.location.clone(),
            config.forecast.clone(),
        ),
        alert_service: AlertService::new(repository.clone(), config.site.location.clone()),
        map_service: MapService::new(repository, config.map.default_style),
        map_access_token: config.map.access_token.clone(),
    });

    if config.map.access_token.trim().is_empty() {
        tracing::warn!("No map access token configured; the map widget will prompt for one");
    }

    // Build router (presentation layer)
    let router = build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting airguard-dashboard on {} (forecast status strategy: {:?})",
        addr,
        config.forecast.status_strategy
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
