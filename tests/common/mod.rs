// Shared test helpers: fake backends and seeded work item stores
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

use workitem_analyzer::providers::{LlmProvider, ProviderRequest, ProviderResponse};
use workitem_analyzer::store::{Record, Table, WorkItemStore};

/// Requests seen by a fake provider
#[derive(Clone, Default)]
pub struct CallLog {
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl CallLog {
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

enum Reply {
    Text(String),
    Fail(String),
}

pub struct FakeProvider {
    reply: Reply,
    log: CallLog,
}

impl FakeProvider {
    pub fn replying(text: &str) -> (Box<dyn LlmProvider>, CallLog) {
        let log = CallLog::default();
        let provider = FakeProvider {
            reply: Reply::Text(text.to_string()),
            log: log.clone(),
        };
        (Box::new(provider), log)
    }

    pub fn failing(message: &str) -> (Box<dyn LlmProvider>, CallLog) {
        let log = CallLog::default();
        let provider = FakeProvider {
            reply: Reply::Fail(message.to_string()),
            log: log.clone(),
        };
        (Box::new(provider), log)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        self.log.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(ProviderResponse {
                text: text.clone(),
                model: "fake-model".to_string(),
                provider: "fake".to_string(),
            }),
            Reply::Fail(message) => Err(anyhow!(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }
}

/// Backend that must never be reached
pub struct UnreachableProvider;

#[async_trait]
impl LlmProvider for UnreachableProvider {
    async fn send_message(&self, _request: &ProviderRequest) -> Result<ProviderResponse> {
        panic!("backend must not be called");
    }

    fn name(&self) -> &str {
        "unreachable"
    }

    fn default_model(&self) -> &str {
        "none"
    }
}

pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Store with two project rows and one developer row
pub fn seeded_store(dir: &Path) -> WorkItemStore {
    let store = WorkItemStore::new(dir);
    store
        .append(
            Table::Projects,
            &record(&[
                ("project_name", "Apollo"),
                ("work_item_id", "101"),
                ("work_item_title", "Login page"),
                ("work_item_type", "Feature"),
                ("status", "Active"),
                ("assigned_to", "Sam"),
            ]),
        )
        .unwrap();
    store
        .append(
            Table::Projects,
            &record(&[
                ("project_name", "Apollo"),
                ("work_item_id", "102"),
                ("work_item_title", "Crash on save"),
                ("work_item_type", "Bug"),
                ("status", "New"),
                ("assigned_to", "Lee"),
            ]),
        )
        .unwrap();
    store
        .append(
            Table::Developers,
            &record(&[
                ("developer_name", "Sam"),
                ("work_item_id", "101"),
                ("work_item_title", "Login page"),
                ("project_name", "Apollo"),
                ("status", "Active"),
            ]),
        )
        .unwrap();
    store
}
