pub mod models;
mod provider;

pub use provider::AnthropicProvider;
