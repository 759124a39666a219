// Answer service
//
// Turns a question into an answer: small-talk shortcut, knowledge base
// rebuild, then one backend call. No state is kept between questions.

mod prompt;
mod router;

pub use prompt::{build_messages, GREETING_REPLY, NO_DATA_REPLY, SYSTEM_INSTRUCTION, THANKS_REPLY};
pub use router::{route, Route, MAX_SMALL_TALK_WORDS, SMALL_TALK_TOKENS};

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config::constants::DEFAULT_TEMPERATURE;
use crate::config::Config;
use crate::knowledge::build_knowledge_base;
use crate::metrics::{MetricsLogger, RequestMetric};
use crate::providers::{LlmProvider, ProviderRequest};
use crate::store::WorkItemStore;

/// Metrics route for turns answered without data
const EMPTY_ROUTE: &str = "empty";
/// Metrics route for turns that failed before reaching the backend
const STORE_ROUTE: &str = "store";

pub struct AnswerService {
    store: WorkItemStore,
    provider: Box<dyn LlmProvider>,
    model: Option<String>,
    temperature: f32,
    small_talk_enabled: bool,
    metrics: Option<MetricsLogger>,
}

impl AnswerService {
    pub fn new(store: WorkItemStore, provider: Box<dyn LlmProvider>) -> Self {
        Self {
            store,
            provider,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            small_talk_enabled: true,
            metrics: None,
        }
    }

    /// Wire up store, backend and metrics from configuration.
    ///
    /// An unusable metrics directory disables metrics instead of failing.
    pub fn from_config(config: &Config, provider: Box<dyn LlmProvider>) -> Self {
        let mut service = Self::new(WorkItemStore::new(&config.data_dir), provider)
            .with_model(config.active_model())
            .with_temperature(config.temperature)
            .with_small_talk(config.features.greeting_shortcut);

        if config.features.metrics_enabled {
            match MetricsLogger::new(config.metrics_dir()) {
                Ok(logger) => service = service.with_metrics(logger),
                Err(e) => tracing::warn!("Request metrics disabled: {:#}", e),
            }
        }

        service
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_small_talk(mut self, enabled: bool) -> Self {
        self.small_talk_enabled = enabled;
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsLogger) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn store(&self) -> &WorkItemStore {
        &self.store
    }

    pub fn metrics(&self) -> Option<&MetricsLogger> {
        self.metrics.as_ref()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Answer one question. Backend failures are returned as errors.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let start = Instant::now();
        let (route_name, result) = self.answer_routed(question).await;
        self.record(question, route_name, start, result.is_ok());
        result
    }

    /// Like [`answer`](Self::answer), but folds a failure into the returned text.
    pub async fn answer_or_error(&self, question: &str) -> String {
        match self.answer(question).await {
            Ok(answer) => answer,
            Err(e) => format!("Error: {:#}", e),
        }
    }

    async fn answer_routed(&self, question: &str) -> (&'static str, Result<String>) {
        match route(question, self.small_talk_enabled) {
            Route::Greeting => return (Route::Greeting.as_str(), Ok(GREETING_REPLY.to_string())),
            Route::Thanks => return (Route::Thanks.as_str(), Ok(THANKS_REPLY.to_string())),
            Route::Backend => {}
        }

        let knowledge_base = match self.load_knowledge_base() {
            Ok(kb) => kb,
            Err(e) => return (STORE_ROUTE, Err(e)),
        };

        if knowledge_base.trim().is_empty() {
            tracing::info!("Knowledge base is empty, skipping backend");
            return (EMPTY_ROUTE, Ok(NO_DATA_REPLY.to_string()));
        }

        (Route::Backend.as_str(), self.ask_backend(&knowledge_base, question).await)
    }

    fn load_knowledge_base(&self) -> Result<String> {
        self.store.ensure_schema()?;
        build_knowledge_base(&self.store).context("Failed to build knowledge base")
    }

    async fn ask_backend(&self, knowledge_base: &str, question: &str) -> Result<String> {
        let mut request = ProviderRequest::new(build_messages(knowledge_base, question))
            .with_temperature(self.temperature);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        tracing::info!(
            provider = self.provider.name(),
            knowledge_base_bytes = knowledge_base.len(),
            "Forwarding question to backend"
        );

        let response = self
            .provider
            .send_message(&request)
            .await
            .with_context(|| format!("{} backend request failed", self.provider.name()))?;

        Ok(response.text.trim().to_string())
    }

    fn record(&self, question: &str, route_name: &str, start: Instant, success: bool) {
        let Some(metrics) = &self.metrics else {
            return;
        };

        let mut metric = RequestMetric::new(
            MetricsLogger::hash_query(question),
            route_name,
            start.elapsed().as_millis() as u64,
        )
        .with_success(success);

        if route_name == Route::Backend.as_str() {
            let model = self
                .model
                .clone()
                .unwrap_or_else(|| self.provider.default_model().to_string());
            metric = metric.with_backend(self.provider.name(), model);
        }

        if let Err(e) = metrics.log(&metric) {
            tracing::warn!("Failed to record request metric: {:#}", e);
        }
    }
}
