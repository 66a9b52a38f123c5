use serde::{Deserialize, Serialize};

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::content::ChatMessage;
use crate::models::usage::Usage;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct OpenAIChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct OpenAIChatCompletion {
    pub id: String,
    pub model: String,
    pub choices: Vec<OpenAIChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct OpenAIChoice {
    pub index: u32,
    pub message: OpenAIResponseMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct OpenAIResponseMessage {
    pub role: String,
    // null when the model refuses or only calls tools
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ChatRequest> for OpenAIChatCompletionRequest {
    fn from(request: ChatRequest) -> Self {
        Self {
            model: request.model,
            messages: request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl From<OpenAIChatCompletion> for ChatResponse {
    fn from(completion: OpenAIChatCompletion) -> Self {
        let content = completion
            .choices
            .into_iter()
            .find(|choice| choice.index == 0)
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        ChatResponse {
            id: completion.id,
            model: completion.model,
            content,
            usage: completion.usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completion_maps_first_choice_text() {
        let completion: OpenAIChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Octopuses have three hearts."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
        }))
        .unwrap();

        let response = ChatResponse::from(completion);
        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.content, "Octopuses have three hearts.");
        assert_eq!(response.usage, Some(Usage::new(12, 7)));
    }

    #[test]
    fn null_content_maps_to_empty_text() {
        let completion: OpenAIChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-456",
            "model": "gpt-4o-mini",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();

        let response = ChatResponse::from(completion);
        assert!(response.content.is_empty());
        assert!(response.usage.is_none());
    }

    #[test]
    fn request_omits_unset_options() {
        let request = OpenAIChatCompletionRequest::from(ChatRequest::new(
            "gpt-4o-mini",
            vec![ChatMessage::user("hello")],
        ));
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }
}
