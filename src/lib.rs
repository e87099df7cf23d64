pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod models;
pub mod parser;
pub mod views;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use catalog::{CatalogService, FileCatalogService};
use cli::{Cli, Commands, cmd_check, cmd_init, cmd_list, cmd_show};
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    match cli.command.clone().unwrap_or(Commands::Serve) {
        Commands::Init => cmd_init(&cli.config_path()),
        Commands::Serve => {
            config.validate()?;
            let prometheus_handle = init_metrics(&config)?;
            run_server(config, prometheus_handle).await
        }
        Commands::List { page } => cmd_list(&file_catalog(&config)?, page).await,
        Commands::Show { identifier } => cmd_show(&file_catalog(&config)?, &identifier).await,
        Commands::Check => cmd_check(&file_catalog(&config)?).await,
    }
}

fn file_catalog(config: &Config) -> anyhow::Result<FileCatalogService> {
    config.validate()?;
    Ok(FileCatalogService::from_config(config))
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("Failed to initialize tracing")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize tracing")?;
    }

    Ok(())
}

fn init_metrics(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    use metrics_exporter_prometheus::PrometheusBuilder;
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

async fn run_server(config: Config, prometheus_handle: Option<PrometheusHandle>) -> anyhow::Result<()> {
    info!("anistream v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = config.bind_address();
    let catalog: Arc<dyn CatalogService> = Arc::new(FileCatalogService::from_config(&config));
    info!(
        stream_dir = %config.catalog.stream_dir,
        cache_enabled = config.catalog.cache_enabled,
        "Catalog configured"
    );

    let state = api::create_app_state_with_catalog(config, catalog, prometheus_handle);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
