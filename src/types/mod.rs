use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::constants::{DEFAULT_HOST, DEFAULT_PORT};

fn no_api_key() -> String {
    "".to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Enum representing the type of LLM provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderType::OpenAI),
            "anthropic" => Ok(ProviderType::Anthropic),
            _ => Err(format!("Unknown provider type: {s}")),
        }
    }
}

/// Credentials and endpoint for one provider backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Provider {
    pub key: String,
    pub r#type: ProviderType,

    #[serde(default = "no_api_key")]
    pub api_key: String,

    /// Overrides the provider's public API base, e.g. for a proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}

/// A named chat client bound to one provider and one model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatClientConfig {
    pub name: String,
    pub provider: String, // Key of the Provider struct
    pub model: String,    // Actual model name, e.g. "gpt-4o-mini"

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timeout applied to outbound provider calls. Unset means the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<Provider>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<ChatClientConfig>,
}

impl AppConfig {
    pub fn provider(&self, key: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.key == key)
    }
}
