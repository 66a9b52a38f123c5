mod instance;
pub mod registry;

pub use instance::{ChatClient, ChatOptions, PromptSpec};
pub use registry::ChatClientRegistry;
