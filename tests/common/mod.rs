#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use multiple_llms_lib::client::{ChatClient, ChatClientRegistry, ChatOptions};
use multiple_llms_lib::errors::ProviderError;
use multiple_llms_lib::models::chat::{ChatRequest, ChatResponse};
use multiple_llms_lib::providers::ChatModel;
use multiple_llms_lib::state::AppState;
use multiple_llms_lib::types::{AppConfig, ProviderType};

// ---------------------------------------------------------------------------
// Stub backends
// ---------------------------------------------------------------------------

pub enum StubReply {
    Text(String),
    /// Each call answers with a fresh UUID.
    UniqueToken,
    Fail(String),
}

pub struct StubModel {
    key: String,
    r#type: ProviderType,
    reply: StubReply,
    pub requests: Mutex<Vec<ChatRequest>>,
    pub issued_tokens: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new(key: &str, r#type: ProviderType, reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            key: key.to_string(),
            r#type,
            reply,
            requests: Mutex::new(Vec::new()),
            issued_tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .flat_map(|request| request.messages.iter().map(|m| m.content.clone()))
            .collect()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn r#type(&self) -> ProviderType {
        self.r#type
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        let content = match &self.reply {
            StubReply::Text(text) => text.clone(),
            StubReply::UniqueToken => {
                let token = uuid::Uuid::new_v4().to_string();
                self.issued_tokens.lock().unwrap().push(token.clone());
                // yield so concurrent calls interleave
                tokio::task::yield_now().await;
                token
            }
            StubReply::Fail(message) => return Err(ProviderError::Other(message.clone())),
        };
        Ok(ChatResponse {
            id: "stub".to_string(),
            model: request.model,
            content,
            usage: None,
        })
    }
}

// ---------------------------------------------------------------------------
// State builders
// ---------------------------------------------------------------------------

pub fn stub_client(name: &str, backend: Arc<StubModel>) -> ChatClient {
    ChatClient::create(
        name,
        backend,
        ChatOptions {
            model: format!("{name}-test-model"),
            ..Default::default()
        },
    )
}

pub fn state_with(openai: Option<Arc<StubModel>>, anthropic: Option<Arc<StubModel>>) -> Arc<AppState> {
    let mut registry = ChatClientRegistry::new();
    if let Some(backend) = openai {
        registry.insert(stub_client("openai", backend));
    }
    if let Some(backend) = anthropic {
        registry.insert(stub_client("anthropic", backend));
    }
    Arc::new(AppState::with_clients(AppConfig::default(), registry))
}
