// Work Item Analyzer - answer questions about project and developer work items
// Library exports

pub mod answer;
pub mod cli;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod metrics;
pub mod providers;
pub mod server;
pub mod store;
