//! Vendor adapters for OpenAI-compatible chat completion services.

pub mod chat;
pub mod deepseek;
pub mod openai;
pub mod types;

// Re-export commonly used provider types
pub use chat::ChatCompletionsClient;
pub use deepseek::DeepseekGenerator;
pub use openai::OpenAIGenerator;
