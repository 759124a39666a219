// Configuration structs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use super::constants::*;

/// Which generation backend answers questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hosted OpenAI-compatible chat completions API
    #[default]
    Openai,
    /// Locally running Ollama daemon
    Ollama,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Openai => "openai",
            BackendKind::Ollama => "ollama",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "hosted" => Ok(BackendKind::Openai),
            "ollama" | "local" => Ok(BackendKind::Ollama),
            other => bail!("Unknown backend '{}' (expected 'openai' or 'ollama')", other),
        }
    }
}

/// Hosted backend settings
///
/// The API key is not stored here; the adapter resolves `OPENAI_API_KEY`
/// itself when it is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub model: String,
    pub base_url: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

/// Local daemon settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub model: String,
    pub host: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            host: DEFAULT_OLLAMA_HOST.to_string(),
        }
    }
}

/// Feature flags configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Answer short greetings and thanks without calling the backend.
    /// Matching is substring based, so "show this" counts as a greeting.
    #[serde(default = "default_true")]
    pub greeting_shortcut: bool,

    /// Append one JSON line per answered turn under `<data_dir>/metrics`
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Lower the default log filter to `debug`
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            greeting_shortcut: true,
            metrics_enabled: true,
            debug_logging: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// HTTP query endpoint. Off by default; the shell runs instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub enabled: bool,
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding both work item tables
    pub data_dir: PathBuf,

    /// Backend used for every non-shortcut answer
    pub backend: BackendKind,

    pub openai: OpenAIConfig,

    pub ollama: OllamaConfig,

    /// Decoding temperature sent with every request
    pub temperature: f32,

    /// HTTP timeout for backend requests
    pub timeout_seconds: u64,

    pub features: FeaturesConfig,

    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            backend: BackendKind::default(),
            openai: OpenAIConfig::default(),
            ollama: OllamaConfig::default(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            features: FeaturesConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            bail!(
                "temperature must be between 0.0 and 2.0 (got {})",
                self.temperature
            );
        }

        if self.active_model().trim().is_empty() {
            bail!("No model configured for the '{}' backend", self.backend);
        }

        if self.timeout_seconds == 0 {
            bail!("timeout_seconds must be greater than zero");
        }

        if self.server.enabled && self.server.bind_address.parse::<SocketAddr>().is_err() {
            bail!(
                "server bind_address must be ip:port (got '{}')",
                self.server.bind_address
            );
        }

        Ok(())
    }

    /// Model name of the selected backend
    pub fn active_model(&self) -> &str {
        match self.backend {
            BackendKind::Openai => &self.openai.model,
            BackendKind::Ollama => &self.ollama.model,
        }
    }

    pub fn metrics_dir(&self) -> PathBuf {
        self.data_dir.join("metrics")
    }
}
