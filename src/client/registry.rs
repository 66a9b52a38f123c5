use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::instance::{ChatClient, ChatOptions};
use crate::providers::registry::ProviderRegistry;
use crate::types::ChatClientConfig;

#[derive(Clone, Default)]
pub struct ChatClientRegistry {
    clients: HashMap<String, Arc<ChatClient>>,
}

impl ChatClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(
        client_configs: &[ChatClientConfig],
        provider_registry: &ProviderRegistry,
    ) -> Result<Self> {
        let mut registry = Self::new();

        for config in client_configs {
            let backend = provider_registry.get(&config.provider).ok_or_else(|| {
                anyhow!(
                    "Client '{}' references unknown provider '{}'",
                    config.name,
                    config.provider
                )
            })?;
            info!(
                "Chat client '{}' bound to provider '{}' (model {})",
                config.name, config.provider, config.model
            );
            registry.insert(ChatClient::create(
                config.name.clone(),
                backend,
                ChatOptions::from(config),
            ));
        }

        Ok(registry)
    }

    pub fn insert(&mut self, client: ChatClient) {
        self.clients
            .insert(client.name().to_string(), Arc::new(client));
    }

    pub fn get(&self, name: &str) -> Option<Arc<ChatClient>> {
        self.clients.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clients.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
