// Unified request/response types for the generation backends
//
// Each provider converts these into its own wire format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single role-tagged chat message ("system", "user" or "assistant")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Unified request format for all providers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderRequest {
    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,

    /// Model name; empty means the provider's default
    pub model: String,

    /// Decoding temperature (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: String::new(),
            temperature: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Resolve the model to send, falling back to `default`
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.model.is_empty() {
            default
        } else {
            &self.model
        }
    }
}

/// Generated text returned by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Generated text, untrimmed
    pub text: String,

    /// Model that produced the text, as reported by the backend
    pub model: String,

    /// Provider name (e.g. "openai", "ollama")
    pub provider: String,
}

/// Backend failures that are not plain transport errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} request failed\n\nStatus: {status}\nBody: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("{provider} returned no message content")]
    EmptyResponse { provider: String },

    #[error("{variable} is not set; the {provider} backend needs an API key")]
    MissingApiKey {
        provider: String,
        variable: &'static str,
    },
}
