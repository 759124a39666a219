// Ollama provider
//
// Talks to a locally running Ollama daemon through its native `/api/chat`
// endpoint with streaming disabled.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{ChatMessage, ProviderError, ProviderRequest, ProviderResponse};
use super::LlmProvider;
use crate::config::OllamaConfig;

#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    host: String,
    default_model: String,
}

impl OllamaProvider {
    /// Create a provider for a daemon at `host`, e.g. `http://localhost:11434`
    pub fn new(host: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            host: normalize_host(&host.into()),
            default_model: model.into(),
        })
    }

    pub fn from_config(config: &OllamaConfig, timeout: Duration) -> Result<Self> {
        Self::new(config.host.clone(), config.model.clone(), timeout)
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.host)
    }

    fn to_ollama_request<'a>(&'a self, request: &'a ProviderRequest) -> OllamaRequest<'a> {
        OllamaRequest {
            model: request.model_or(&self.default_model),
            messages: &request.messages,
            stream: false,
            options: request.temperature.map(|temperature| OllamaOptions { temperature }),
        }
    }
}

/// `OLLAMA_HOST` is often given as a bare `host:port`; default the scheme.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        let body = self.to_ollama_request(request);
        let url = self.endpoint();

        tracing::debug!(url = %url, model = body.model, messages = body.messages.len(), "Sending Ollama chat request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to reach Ollama at {} (is `ollama serve` running?)", self.host))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: "ollama".to_string(),
                status: status.as_u16(),
                body: error_body,
            }
            .into());
        }

        let parsed: OllamaResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        tracing::debug!(model = %parsed.model, "Received Ollama response");

        let text = parsed
            .message
            .map(|message| message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::EmptyResponse {
                provider: "ollama".to_string(),
            })?;

        Ok(ProviderResponse {
            text,
            model: parsed.model,
            provider: "ollama".to_string(),
        })
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    message: Option<OllamaMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("http://localhost:11434/"), "http://localhost:11434");
        assert_eq!(normalize_host("127.0.0.1:11434"), "http://127.0.0.1:11434");
        assert_eq!(normalize_host("https://ollama.internal"), "https://ollama.internal");
    }

    #[test]
    fn test_request_disables_streaming() {
        let provider =
            OllamaProvider::new("localhost:11434", "llama3.2", Duration::from_secs(5)).unwrap();
        let request =
            ProviderRequest::new(vec![ChatMessage::user("what is open?")]).with_temperature(0.2);

        let json = serde_json::to_value(provider.to_ollama_request(&request)).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json["options"]["temperature"].is_number());
        assert_eq!(provider.endpoint(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_options_omitted_without_temperature() {
        let provider =
            OllamaProvider::new("http://localhost:11434", "llama3.2", Duration::from_secs(5)).unwrap();
        let request = ProviderRequest::new(vec![ChatMessage::user("x")]);
        let json = serde_json::to_value(provider.to_ollama_request(&request)).unwrap();
        assert!(json.get("options").is_none());
    }
}
