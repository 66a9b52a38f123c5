use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::{OpenAIChatCompletion, OpenAIChatCompletionRequest};
use crate::config::constants::OPENAI_API_BASE;
use crate::errors::ProviderError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::providers::provider::ChatModel;
use crate::types::{Provider as ProviderConfig, ProviderType};

pub struct OpenAIProvider {
    config: ProviderConfig,
    http_client: Client,
}

impl OpenAIProvider {
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
            .unwrap_or(OPENAI_API_BASE)
            .trim_end_matches('/')
    }
}

#[async_trait]
impl ChatModel for OpenAIProvider {
    fn key(&self) -> String {
        self.config.key.clone()
    }

    fn r#type(&self) -> ProviderType {
        ProviderType::OpenAI
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let payload = OpenAIChatCompletionRequest::from(request);
        debug!(
            "Sending chat completion to {} with model {}",
            self.config.key, payload.model
        );

        let mut builder = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .bearer_auth(&self.config.api_key);
        if let Some(organization) = self.config.params.get("organization") {
            builder = builder.header("OpenAI-Organization", organization);
        }

        let response = builder
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
            debug!("OpenAI API request error ({}): {}", status, body);
            return Err(ProviderError::Upstream {
                provider: self.key(),
                status: status.as_u16(),
                body,
            });
        }

        let completion: OpenAIChatCompletion =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Decode {
                    provider: self.key(),
                    source,
                })?;
        Ok(completion.into())
    }
}
