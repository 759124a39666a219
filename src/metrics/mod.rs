// Metrics module
// Per-turn request metrics, appended as JSON lines

mod logger;
mod types;

pub use logger::{MetricsLogger, MetricsSummary};
pub use types::RequestMetric;
