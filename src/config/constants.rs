// Project-wide constants
//
// Defaults live here so file names, model names and endpoints have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Directory holding the two work item tables, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Project table file name inside the data directory.
pub const PROJECT_TABLE_FILE: &str = "projects_workitems.csv";

/// Developer table file name inside the data directory.
pub const DEVELOPER_TABLE_FILE: &str = "developers_workitems.csv";

/// Hosted backend model when `OPENAI_MODEL` is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";

/// Hosted backend base URL (the `/v1/chat/completions` path is appended).
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Local daemon model when `OLLAMA_MODEL` is not set.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Ollama listens on 11434 unless told otherwise.
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Low temperature keeps answers close to the knowledge base.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// HTTP request timeout for backend calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Bind address for the HTTP query endpoint (the web frontend expects port 8000).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Label printed in front of every answer.
pub const ASSISTANT_LABEL: &str = "Analyzer";

/// Config file location under the home directory.
pub const CONFIG_DIR_NAME: &str = ".workitem-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
