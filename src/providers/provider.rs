use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::types::ProviderType;

/// A chat-completion backend. Implementations are shared read-only across requests.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn key(&self) -> String;
    fn r#type(&self) -> ProviderType;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}
