// Metrics data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetric {
    pub timestamp: DateTime<Utc>,
    /// SHA-256 of the question; the text itself is never logged
    pub query_hash: String,
    /// "greeting", "thanks", "empty", "store" or "backend"
    pub route: String,
    /// Backend name, only set when the backend was called
    pub provider: Option<String>,
    pub model: Option<String>,
    pub response_time_ms: u64,
    pub success: bool,
}

impl RequestMetric {
    pub fn new(query_hash: String, route: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            query_hash,
            route: route.into(),
            provider: None,
            model: None,
            response_time_ms,
            success: true,
        }
    }

    pub fn with_backend(mut self, provider: impl Into<String>, model: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self.model = Some(model.into());
        self
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }
}
