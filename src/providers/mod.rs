// Generation backends
//
// Both backends accept an ordered list of role-tagged messages and return
// generated text. The answer service only sees the `LlmProvider` trait, so
// tests can substitute a fake.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod ollama;
pub mod openai;
pub mod types;

pub use factory::create_provider;
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use types::{ChatMessage, ProviderError, ProviderRequest, ProviderResponse};

/// Trait for text generation backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the messages and wait for the complete response
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Provider name (e.g., "openai", "ollama")
    fn name(&self) -> &str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;
}
