// OpenAI-compatible chat completions provider
//
// Works against api.openai.com and any server speaking the same
// `/v1/chat/completions` format.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{ChatMessage, ProviderError, ProviderRequest, ProviderResponse};
use super::LlmProvider;
use crate::config::OpenAIConfig;

/// Environment variable holding the hosted API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    provider_name: String,
}

impl OpenAIProvider {
    /// Create a provider for a base URL such as `https://api.openai.com`.
    ///
    /// A missing key is reported when a request is made, not here, so the
    /// shell can still start and answer greetings.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into(),
            default_model: crate::config::constants::DEFAULT_OPENAI_MODEL.to_string(),
            provider_name: "openai".to_string(),
        })
    }

    /// Build from config, reading the key from `OPENAI_API_KEY`
    pub fn from_config(config: &OpenAIConfig, timeout: Duration) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        if api_key.is_none() {
            tracing::warn!("{} is not set; hosted backend requests will fail", API_KEY_ENV);
        }
        Ok(Self::new(api_key, config.base_url.clone(), timeout)?.with_model(config.model.clone()))
    }

    /// Set custom model for this provider
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    fn to_openai_request<'a>(&'a self, request: &'a ProviderRequest) -> OpenAIRequest<'a> {
        OpenAIRequest {
            model: request.model_or(&self.default_model),
            messages: &request.messages,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        let api_key = self.api_key.as_ref().ok_or_else(|| ProviderError::MissingApiKey {
            provider: self.provider_name.clone(),
            variable: API_KEY_ENV,
        })?;

        let body = self.to_openai_request(request);
        let url = self.endpoint();

        tracing::debug!(url = %url, model = body.model, messages = body.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: self.provider_name.clone(),
                status: status.as_u16(),
                body: error_body,
            }
            .into());
        }

        let parsed: OpenAIResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        tracing::debug!(model = %parsed.model, choices = parsed.choices.len(), "Received chat completion");

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::EmptyResponse {
                provider: self.provider_name.clone(),
            })?;

        Ok(ProviderResponse {
            text,
            model: parsed.model,
            provider: self.provider_name.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.provider_name
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}
