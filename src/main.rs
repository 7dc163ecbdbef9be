mod cli;
mod ui;

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bongochat::{AiService, BongoChatClient, ClientConfig, prompt_from_bytes};
use cli::Cli;
use ui::RequestProgress;

const DEFAULT_PROMPT: &str = "Hello";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    if let Some(model) = &cli.model {
        config = config.with_model(model.as_str());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }
    tracing::debug!(base_url = %config.base_url, model = %config.model, "configuration loaded");

    let prompt = if cli.stdin {
        let mut raw = Vec::new();
        std::io::stdin()
            .read_to_end(&mut raw)
            .context("failed to read prompt from stdin")?;
        match prompt_from_bytes(&raw) {
            Ok(prompt) => prompt.trim_end_matches(['\r', '\n']).to_string(),
            Err(err) => {
                ui::print_error(&err);
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        cli.prompt.clone().unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    };

    let client = BongoChatClient::from_config(config)?;
    let progress = RequestProgress::start(&client.config().model, !cli.verbose);
    let result = client.generate_response(&prompt).await;
    progress.finish();

    match result {
        Ok(response) => {
            ui::print_response(&response, cli.json)?;
            Ok(if response.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(err) => {
            ui::print_error(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "bongochat=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
