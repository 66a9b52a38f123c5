use anyhow::Context;
use multiple_llms_lib::types::AppConfig;
use multiple_llms_lib::{config, routes, state::AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn load_app_config() -> anyhow::Result<AppConfig> {
    let app_config = match std::env::var("CONFIG_FILE_PATH") {
        Ok(config_path) => {
            info!("Loading configuration from {}", config_path);
            config::load_config(&config_path).with_context(|| {
                format!("Failed to load YAML configuration from {config_path}")
            })?
        }
        Err(_) => {
            info!("CONFIG_FILE_PATH not set. Building configuration from environment.");
            config::config_from_env().context("Failed to read configuration from environment")?
        }
    };

    if let Err(val_errors) = config::validation::validate_config(&app_config) {
        for val_error in &val_errors {
            error!("{}", val_error);
        }
        anyhow::bail!("Invalid configuration: {} error(s)", val_errors.len());
    }
    info!("Configuration validated successfully.");
    Ok(app_config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting multiple-llms server...");

    let app_config = load_app_config()?;
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);

    let app_state =
        Arc::new(AppState::new(app_config).context("Failed to create app state")?);
    info!("Chat clients ready: {:?}", app_state.clients.names());

    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Server is running on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
