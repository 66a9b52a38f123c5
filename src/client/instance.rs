use std::sync::Arc;

use tracing::debug;

use crate::errors::ProviderError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::content::ChatMessage;
use crate::providers::provider::ChatModel;
use crate::types::ChatClientConfig;

/// Per-client defaults applied to every request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatOptions {
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl From<&ChatClientConfig> for ChatOptions {
    fn from(config: &ChatClientConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// A named handle on one backend. Immutable once built; share it behind an `Arc`.
pub struct ChatClient {
    name: String,
    backend: Arc<dyn ChatModel>,
    options: ChatOptions,
}

impl ChatClient {
    pub fn create(
        name: impl Into<String>,
        backend: Arc<dyn ChatModel>,
        options: ChatOptions,
    ) -> Self {
        Self {
            name: name.into(),
            backend,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    pub fn prompt(&self) -> PromptSpec<'_> {
        PromptSpec {
            client: self,
            messages: Vec::new(),
        }
    }

    /// Sends `prompt` as a single user message and returns the completion text.
    pub async fn submit(&self, prompt: &str) -> Result<String, ProviderError> {
        Ok(self.prompt().user(prompt).call().await?.content)
    }
}

/// Messages for one call, built up fluently from [`ChatClient::prompt`].
pub struct PromptSpec<'a> {
    client: &'a ChatClient,
    messages: Vec<ChatMessage>,
}

impl PromptSpec<'_> {
    pub fn system(mut self, text: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(text));
        self
    }

    pub fn user(mut self, text: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(text));
        self
    }

    pub async fn call(self) -> Result<ChatResponse, ProviderError> {
        let options = &self.client.options;
        let request = ChatRequest {
            model: options.model.clone(),
            messages: self.messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!(
            "Chat client '{}' calling provider '{}'",
            self.client.name,
            self.client.backend.key()
        );
        let response = self.client.backend.chat(request).await?;
        if response.content.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion {
                provider: self.client.backend.key(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderType;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingModel {
        reply: String,
        seen: Mutex<Vec<ChatRequest>>,
    }

    #[async_trait]
    impl ChatModel for RecordingModel {
        fn key(&self) -> String {
            "recording".to_string()
        }

        fn r#type(&self) -> ProviderType {
            ProviderType::OpenAI
        }

        async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(ChatResponse {
                id: "resp-1".to_string(),
                model: request.model,
                content: self.reply.clone(),
                usage: None,
            })
        }
    }

    fn client_with_reply(reply: &str) -> (ChatClient, Arc<RecordingModel>) {
        let model = Arc::new(RecordingModel {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        });
        let client = ChatClient::create(
            "openai",
            model.clone(),
            ChatOptions {
                model: "gpt-4o-mini".to_string(),
                max_tokens: Some(128),
                temperature: Some(0.2),
            },
        );
        (client, model)
    }

    #[tokio::test]
    async fn submit_sends_single_user_message_with_client_options() {
        let (client, model) = client_with_reply("A fact.");

        let text = client.submit("Tell me something").await.unwrap();
        assert_eq!(text, "A fact.");

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            ChatRequest {
                model: "gpt-4o-mini".to_string(),
                messages: vec![ChatMessage::user("Tell me something")],
                max_tokens: Some(128),
                temperature: Some(0.2),
            }
        );
    }

    #[tokio::test]
    async fn prompt_spec_keeps_message_order() {
        let (client, model) = client_with_reply("ok");

        let response = client
            .prompt()
            .system("Be terse.")
            .user("Hello")
            .call()
            .await
            .unwrap();
        assert_eq!(response.model, "gpt-4o-mini");

        let seen = model.seen.lock().unwrap();
        assert_eq!(
            seen[0].messages,
            vec![ChatMessage::system("Be terse."), ChatMessage::user("Hello")]
        );
    }

    #[tokio::test]
    async fn blank_completion_is_an_error() {
        let (client, _) = client_with_reply("  \n");
        let err = client.submit("anything").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyCompletion { provider } if provider == "recording"));
    }
}
