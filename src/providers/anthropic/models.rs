use crate::config::constants::default_max_tokens;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::content::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AnthropicChatCompletionRequest {
    pub max_tokens: u32,
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AnthropicChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    // tool_use, thinking and future block kinds carry no completion text
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<ChatRequest> for AnthropicChatCompletionRequest {
    fn from(request: ChatRequest) -> Self {
        let system = request.system_prompt().map(str::to_string);

        let messages: Vec<ChatMessage> = request
            .messages
            .into_iter()
            .filter(|msg| msg.role != Role::System)
            .collect();

        let max_tokens = match request.max_tokens {
            Some(val) if val > 0 => val,
            _ => default_max_tokens(),
        };

        AnthropicChatCompletionRequest {
            max_tokens,
            model: request.model,
            messages,
            temperature: request.temperature,
            system,
        }
    }
}

impl From<AnthropicChatCompletionResponse> for ChatResponse {
    fn from(response: AnthropicChatCompletionResponse) -> Self {
        let content = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        ChatResponse {
            id: response.id,
            model: response.model,
            content,
            usage: Some(crate::models::usage::Usage::new(
                response.usage.input_tokens,
                response.usage.output_tokens,
            )),
        }
    }
}
