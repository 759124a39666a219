// Provider factory
//
// Creates the configured generation backend

use anyhow::Result;
use std::time::Duration;

use super::ollama::OllamaProvider;
use super::openai::OpenAIProvider;
use super::LlmProvider;
use crate::config::{BackendKind, Config};

/// Create the `LlmProvider` selected by `config.backend`.
pub fn create_provider(config: &Config) -> Result<Box<dyn LlmProvider>> {
    let timeout = Duration::from_secs(config.timeout_seconds);

    let provider: Box<dyn LlmProvider> = match config.backend {
        BackendKind::Openai => Box::new(OpenAIProvider::from_config(&config.openai, timeout)?),
        BackendKind::Ollama => Box::new(OllamaProvider::from_config(&config.ollama, timeout)?),
    };

    tracing::info!(
        provider = provider.name(),
        model = provider.default_model(),
        "Generation backend ready"
    );

    Ok(provider)
}
