use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::{AnthropicChatCompletionRequest, AnthropicChatCompletionResponse};
use crate::config::constants::{ANTHROPIC_API_BASE, ANTHROPIC_API_VERSION};
use crate::errors::ProviderError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::providers::provider::ChatModel;
use crate::types::{Provider as ProviderConfig, ProviderType};

pub struct AnthropicProvider {
    config: ProviderConfig,
    http_client: Client,
}

impl AnthropicProvider {
    pub fn new(config: &ProviderConfig, http_client: Client) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey(config.key.clone()));
        }
        Ok(Self {
            config: config.clone(),
            http_client,
        })
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(ANTHROPIC_API_BASE)
            .trim_end_matches('/')
    }

    fn api_version(&self) -> &str {
        self.config
            .params
            .get("api_version")
            .map(String::as_str)
            .unwrap_or(ANTHROPIC_API_VERSION)
    }
}

#[async_trait]
impl ChatModel for AnthropicProvider {
    fn key(&self) -> String {
        self.config.key.clone()
    }

    fn r#type(&self) -> ProviderType {
        ProviderType::Anthropic
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let payload = AnthropicChatCompletionRequest::from(request);
        debug!(
            "Sending message to {} with model {}",
            self.config.key, payload.model
        );

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url()))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", self.api_version())
            .json(&payload)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: self.key(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Anthropic API request error ({}): {}", status, body);
            return Err(ProviderError::Upstream {
                provider: self.key(),
                status: status.as_u16(),
                body,
            });
        }

        let anthropic_response: AnthropicChatCompletionResponse = response
            .json()
            .await
            .map_err(|source| ProviderError::Decode {
                provider: self.key(),
                source,
            })?;
        Ok(anthropic_response.into())
    }
}
