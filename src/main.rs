// src/main.rs — embedscope entry point

use clap::Parser;
use std::sync::Arc;

use embedscope::cli::{Cli, Commands};
use embedscope::client::{HttpScoringClient, ScoringBackend};
use embedscope::infra::config::Config;
use embedscope::infra::{logger, paths};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file instead.
    if cli.command.is_none() {
        let log_path = paths::log_file_path();
        if let Err(e) = logger::init_file_logging("info", &log_path) {
            eprintln!("warning: cannot open log file {}: {e}", log_path.display());
        }
    } else {
        logger::init_logging("warn");
    }

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    cli.apply_overrides(&mut config)?;
    tracing::debug!(endpoint = %config.service.base_url, model = %config.models.default, "config loaded");

    let backend: Arc<dyn ScoringBackend> = Arc::new(HttpScoringClient::from_config(&config.service));

    match cli.command {
        Some(Commands::Compare {
            texts,
            method,
            json,
        }) => {
            embedscope::cli::compare::run_compare(backend, &config, &texts, method.into(), json)
                .await
        }
        Some(Commands::Models) => {
            embedscope::cli::models::run_models(&config);
            Ok(())
        }
        Some(Commands::Funds) => embedscope::cli::funds::run_funds(backend.as_ref()).await,
        None => {
            let model = config.models.default.clone();
            embedscope::tui::run_playground(&config, backend, model)
        }
    }
}
