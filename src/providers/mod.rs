pub mod anthropic;
pub mod openai;
pub mod provider;
pub mod registry;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;
pub use provider::ChatModel;
pub use registry::ProviderRegistry;
