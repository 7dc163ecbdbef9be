//! Command-line interface for the `bongochat` binary, built on clap.

use std::path::PathBuf;

use clap::Parser;

/// Send one prompt to the Bongo chat endpoint and print the reply.
#[derive(Debug, Parser)]
#[command(name = "bongochat", version, about)]
pub struct Cli {
    /// Prompt to send. Defaults to "Hello".
    pub prompt: Option<String>,

    /// Read the prompt from standard input instead.
    #[arg(long, conflicts_with = "prompt")]
    pub stdin: bool,

    /// Model identifier, overriding config and environment.
    #[arg(long, short)]
    pub model: Option<String>,

    /// Path to a TOML config file (default: ./bongochat.toml if present).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the response record as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
