use crate::client::ChatClientRegistry;
use crate::providers::registry::ProviderRegistry;
use crate::types::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub clients: Arc<ChatClientRegistry>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let timeout = config.server.request_timeout_secs.map(Duration::from_secs);
        let provider_registry = ProviderRegistry::new(&config.providers, timeout)?;
        let clients = ChatClientRegistry::from_config(&config.clients, &provider_registry)?;

        Ok(Self::with_clients(config, clients))
    }

    /// Builds state around an already-wired registry, e.g. one holding stub backends.
    pub fn with_clients(config: AppConfig, clients: ChatClientRegistry) -> Self {
        Self {
            config: Arc::new(config),
            clients: Arc::new(clients),
        }
    }
}
