// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{
    load_config, load_config_from, parse_config_file, resolve_config, FileBackendSection,
    FileConfig, FileServerSection, LoadedConfig,
};
pub use settings::{BackendKind, Config, FeaturesConfig, OllamaConfig, OpenAIConfig, ServerConfig};
