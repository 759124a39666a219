// Work Item Analyzer - chatbot over project/developer work items
// Main entry point

use anyhow::Result;
use std::io::{self, IsTerminal};

use workitem_analyzer::answer::AnswerService;
use workitem_analyzer::cli::{BufferedReader, EditorReader, Repl};
use workitem_analyzer::config::load_config;
use workitem_analyzer::logging::init_tracing;
use workitem_analyzer::providers::create_provider;
use workitem_analyzer::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration (.env, config file, environment)
    let loaded = load_config()?;

    init_tracing(loaded.config.features.debug_logging);
    loaded.log_sources();

    let config = loaded.config;
    tracing::debug!(?config, "Configuration loaded");

    // Create the generation backend and the answer service around it
    let provider = create_provider(&config)?;
    let service = AnswerService::from_config(&config, provider);

    if config.server.enabled {
        return server::serve(&config.server.bind_address, service).await;
    }

    let colors = io::stdout().is_terminal();

    if io::stdin().is_terminal() {
        let reader = EditorReader::new()?;
        Repl::new(service, reader, io::stdout())
            .with_colors(colors)
            .run()
            .await?;
    } else {
        // Piped input: plain line reads, no line editing
        let reader = BufferedReader::new(io::stdin().lock());
        Repl::new(service, reader, io::stdout())
            .with_colors(colors)
            .run()
            .await?;
    }

    Ok(())
}
