// Metrics logger

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use super::types::RequestMetric;

pub struct MetricsLogger {
    metrics_dir: PathBuf,
}

impl MetricsLogger {
    pub fn new(metrics_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&metrics_dir).with_context(|| {
            format!(
                "Failed to create metrics directory: {}",
                metrics_dir.display()
            )
        })?;

        Ok(Self { metrics_dir })
    }

    /// Log a request metric to today's JSONL file
    pub fn log(&self, metric: &RequestMetric) -> Result<()> {
        let date = metric.timestamp.format("%Y-%m-%d").to_string();
        let log_file = self.metrics_dir.join(format!("{}.jsonl", date));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open metrics log: {}", log_file.display()))?;

        let json = serde_json::to_string(metric).context("Failed to serialize metric")?;

        writeln!(file, "{}", json).context("Failed to write metric to log")?;

        Ok(())
    }

    /// Hash a query for privacy (SHA256)
    pub fn hash_query(query: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(query.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Read metrics for a specific date (YYYY-MM-DD)
    pub fn read_metrics(&self, date: &str) -> Result<Vec<RequestMetric>> {
        let log_file = self.metrics_dir.join(format!("{}.jsonl", date));

        if !log_file.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&log_file)
            .with_context(|| format!("Failed to read metrics log: {}", log_file.display()))?;

        contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse metrics")
    }

    /// Summary statistics for one day
    pub fn summary(&self, date: &str) -> Result<MetricsSummary> {
        let metrics = self.read_metrics(date)?;

        let mut by_route: HashMap<String, usize> = HashMap::new();
        for metric in &metrics {
            *by_route.entry(metric.route.clone()).or_insert(0) += 1;
        }

        let backend: Vec<&RequestMetric> =
            metrics.iter().filter(|m| m.route == "backend").collect();
        let avg_backend_time = if backend.is_empty() {
            0
        } else {
            backend.iter().map(|m| m.response_time_ms).sum::<u64>() / backend.len() as u64
        };

        Ok(MetricsSummary {
            total: metrics.len(),
            failures: metrics.iter().filter(|m| !m.success).count(),
            by_route,
            avg_backend_time,
        })
    }

    /// Summary for today (UTC)
    pub fn today_summary(&self) -> Result<MetricsSummary> {
        self.summary(&Utc::now().format("%Y-%m-%d").to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSummary {
    pub total: usize,
    pub failures: usize,
    pub by_route: HashMap<String, usize>,
    pub avg_backend_time: u64,
}
