// Configuration loader
// Layers ~/.workitem-analyzer/config.toml, .env and the process environment
// over the built-in defaults.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::{BackendKind, Config, FeaturesConfig};

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
const FALSY: [&str; 4] = ["0", "false", "no", "off"];

/// On-disk config file. Every field is optional; absent fields keep defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub backend: Option<BackendKind>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub openai: Option<FileBackendSection>,
    #[serde(default)]
    pub ollama: Option<FileBackendSection>,
    #[serde(default)]
    pub features: Option<FeaturesConfig>,
    #[serde(default)]
    pub server: Option<FileServerSection>,
}

/// `[openai]` / `[ollama]` tables. `base_url` and `host` are accepted for both.
#[derive(Debug, Default, Deserialize)]
pub struct FileBackendSection {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, alias = "host")]
    pub base_url: Option<String>,
}

/// `[server]` table
#[derive(Debug, Default, Deserialize)]
pub struct FileServerSection {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub bind_address: Option<String>,
}

/// Resolved configuration plus the files it was read from.
///
/// Loading happens before tracing is initialised, so the sources are kept
/// here and reported by [`LoadedConfig::log_sources`] afterwards.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub env_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn log_sources(&self) {
        match &self.env_file {
            Some(path) => tracing::debug!("Loaded environment from {}", path.display()),
            None => tracing::debug!("No .env file found"),
        }
        match &self.config_file {
            Some(path) => tracing::debug!("Loaded config file {}", path.display()),
            None => tracing::debug!("No config file, using defaults"),
        }
    }
}

/// Load configuration from the config file, `.env` and environment variables
pub fn load_config() -> Result<LoadedConfig> {
    // .env is optional; a missing file is not an error
    let env_file = dotenvy::dotenv().ok();

    let mut loaded = load_config_from(config_file_path(), |key| std::env::var(key).ok())?;
    loaded.env_file = env_file;
    Ok(loaded)
}

/// Load from an explicit config file path and environment lookup
pub fn load_config_from<F>(config_file: Option<PathBuf>, env: F) -> Result<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config_file = config_file.filter(|path| path.exists());
    let file = match &config_file {
        Some(path) => Some(load_file(path)?),
        None => None,
    };

    Ok(LoadedConfig {
        config: resolve_config(file, env)?,
        env_file: None,
        config_file,
    })
}

fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_file(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse the TOML config file format
pub fn parse_config_file(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).context("Invalid TOML in config file")
}

/// Merge defaults, an optional config file and an environment lookup.
///
/// Environment values win over the file. Empty environment values are ignored.
pub fn resolve_config<F>(file: Option<FileConfig>, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(file) = file {
        if let Some(backend) = file.backend {
            config.backend = backend;
        }
        if let Some(dir) = file.data_dir {
            config.data_dir = dir;
        }
        if let Some(temperature) = file.temperature {
            config.temperature = temperature;
        }
        if let Some(timeout) = file.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(section) = file.openai {
            if let Some(model) = section.model {
                config.openai.model = model;
            }
            if let Some(url) = section.base_url {
                config.openai.base_url = url;
            }
        }
        if let Some(section) = file.ollama {
            if let Some(model) = section.model {
                config.ollama.model = model;
            }
            if let Some(host) = section.base_url {
                config.ollama.host = host;
            }
        }
        if let Some(features) = file.features {
            config.features = features;
        }
        if let Some(section) = file.server {
            if let Some(enabled) = section.enabled {
                config.server.enabled = enabled;
            }
            if let Some(addr) = section.bind_address {
                config.server.bind_address = addr;
            }
        }
    }

    let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(backend) = env("ANALYZER_BACKEND") {
        config.backend = backend
            .parse::<BackendKind>()
            .context("Invalid ANALYZER_BACKEND value")?;
    }
    if let Some(dir) = env("ANALYZER_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(model) = env("OPENAI_MODEL") {
        config.openai.model = model;
    }
    if let Some(url) = env("OPENAI_BASE_URL") {
        config.openai.base_url = url;
    }
    if let Some(model) = env("OLLAMA_MODEL") {
        config.ollama.model = model;
    }
    if let Some(host) = env("OLLAMA_HOST") {
        config.ollama.host = host;
    }
    if let Some(serve) = env("ANALYZER_SERVE") {
        config.server.enabled = parse_flag(&serve).context("Invalid ANALYZER_SERVE value")?;
    }
    if let Some(addr) = env("ANALYZER_HTTP_ADDR") {
        config.server.bind_address = addr;
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn parse_flag(value: &str) -> Result<bool> {
    let value = value.trim().to_lowercase();
    if TRUTHY.contains(&value.as_str()) {
        Ok(true)
    } else if FALSY.contains(&value.as_str()) {
        Ok(false)
    } else {
        bail!("expected one of {:?} or {:?}, got '{}'", TRUTHY, FALSY, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = resolve_config(None, env_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_values_applied() {
        let file = parse_config_file(
            r#"
            backend = "ollama"
            data_dir = "/srv/workitems"
            temperature = 0.1

            [ollama]
            model = "mistral"
            host = "http://gpu-box:11434"

            [features]
            greeting_shortcut = false
            "#,
        )
        .unwrap();

        let config = resolve_config(Some(file), env_from(&[])).unwrap();
        assert_eq!(config.backend, BackendKind::Ollama);
        assert_eq!(config.data_dir, PathBuf::from("/srv/workitems"));
        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.ollama.host, "http://gpu-box:11434");
        assert!(!config.features.greeting_shortcut);
        assert!(config.features.metrics_enabled);
        assert!((config.temperature - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = parse_config_file("backend = \"ollama\"\n[openai]\nmodel = \"gpt-4o\"\n").unwrap();
        let config = resolve_config(
            Some(file),
            env_from(&[("ANALYZER_BACKEND", "openai"), ("OPENAI_MODEL", "gpt-4.1")]),
        )
        .unwrap();

        assert_eq!(config.backend, BackendKind::Openai);
        assert_eq!(config.openai.model, "gpt-4.1");
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let config = resolve_config(None, env_from(&[("OLLAMA_MODEL", "")])).unwrap();
        assert_eq!(config.ollama.model, "llama3.2");
    }

    #[test]
    fn test_invalid_backend_env_rejected() {
        let result = resolve_config(None, env_from(&[("ANALYZER_BACKEND", "gemini")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_server_settings_from_file_and_env() {
        let file = parse_config_file("[server]\nbind_address = \"0.0.0.0:8080\"\n").unwrap();
        let config = resolve_config(Some(file), env_from(&[("ANALYZER_SERVE", "yes")])).unwrap();
        assert!(config.server.enabled);
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");

        let config = resolve_config(
            None,
            env_from(&[("ANALYZER_SERVE", "1"), ("ANALYZER_HTTP_ADDR", "127.0.0.1:9001")]),
        )
        .unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9001");

        let config = resolve_config(None, env_from(&[])).unwrap();
        assert!(!config.server.enabled);
    }

    #[test]
    fn test_invalid_serve_flag_rejected() {
        let result = resolve_config(None, env_from(&[("ANALYZER_SERVE", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_records_config_file_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend = \"ollama\"\n").unwrap();

        let loaded = load_config_from(Some(path.clone()), env_from(&[])).unwrap();

        assert_eq!(loaded.config_file, Some(path));
        assert_eq!(loaded.config.backend, BackendKind::Ollama);
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = tempfile::TempDir::new().unwrap();

        let loaded =
            load_config_from(Some(dir.path().join("missing.toml")), env_from(&[])).unwrap();

        assert_eq!(loaded.config_file, None);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(parse_config_file("backend = [").is_err());
    }
}
