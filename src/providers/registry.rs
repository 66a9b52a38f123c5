use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::providers::{anthropic::AnthropicProvider, openai::OpenAIProvider, provider::ChatModel};
use crate::types::{Provider as ProviderConfig, ProviderType};

pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ChatModel>>,
}

impl ProviderRegistry {
    pub fn new(provider_configs: &[ProviderConfig], timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        // One pooled client shared by every backend.
        let http_client = builder.build().context("failed to build HTTP client")?;

        let mut providers = HashMap::new();
        for config in provider_configs {
            let provider: Arc<dyn ChatModel> = match config.r#type {
                ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config, http_client.clone())?),
                ProviderType::Anthropic => {
                    Arc::new(AnthropicProvider::new(config, http_client.clone())?)
                }
            };
            info!("Registered {} provider '{}'", config.r#type, config.key);
            providers.insert(config.key.clone(), provider);
        }

        Ok(Self { providers })
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn ChatModel>> {
        self.providers.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(key: &str, r#type: ProviderType, api_key: &str) -> ProviderConfig {
        ProviderConfig {
            key: key.to_string(),
            r#type,
            api_key: api_key.to_string(),
            base_url: None,
            params: Default::default(),
        }
    }

    #[test]
    fn builds_one_backend_per_provider() {
        let registry = ProviderRegistry::new(
            &[
                provider("openai", ProviderType::OpenAI, "sk-1"),
                provider("anthropic", ProviderType::Anthropic, "sk-ant-1"),
            ],
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("openai").unwrap().r#type(), ProviderType::OpenAI);
        assert_eq!(registry.get("anthropic").unwrap().key(), "anthropic");
        assert!(registry.get("bedrock").is_none());
    }

    #[test]
    fn rejects_provider_without_api_key() {
        let err = ProviderRegistry::new(&[provider("openai", ProviderType::OpenAI, "")], None)
            .err()
            .expect("empty key must fail");
        assert!(err.to_string().contains("no API key configured for provider 'openai'"));
    }
}
