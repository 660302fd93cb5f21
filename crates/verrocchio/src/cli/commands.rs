//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use verrocchio_core::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use verrocchio_pipeline::REPORT_FILE_NAME;

/// Turn a product idea into a validated development plan through a chained
/// sequence of Anthropic API calls.
#[derive(Debug, Parser)]
#[command(name = "verrocchio", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the six-stage product development pipeline for an idea.
    Run {
        /// The product idea to develop.
        #[arg(long, conflicts_with = "idea_file")]
        idea: Option<String>,

        /// Read the product idea from a file instead.
        #[arg(long)]
        idea_file: Option<PathBuf>,

        /// Anthropic API key (sk-ant-...).
        #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Model identifier to send requests to.
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Maximum output tokens per request.
        #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
        max_tokens: u32,

        /// Where to write the plain-text report.
        #[arg(long, default_value = REPORT_FILE_NAME)]
        output: PathBuf,
    },
}
