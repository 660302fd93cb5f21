//! Handler for the `run` command.

use crate::ConsoleObserver;
use std::path::{Path, PathBuf};
use tracing::info;
use verrocchio_core::{AnthropicClient, AnthropicConfig};
use verrocchio_error::{ConfigError, VerrocchioResult};
use verrocchio_pipeline::{render_report, validate, PipelineRunner};

/// Runs the full pipeline and writes the report artifact.
///
/// # Errors
///
/// Fails on invalid inputs, any stage failure, or an unwritable output path.
/// The first stage failure aborts the run; no partial report is written.
pub async fn handle_run_command(
    idea: Option<String>,
    idea_file: Option<PathBuf>,
    api_key: String,
    model: String,
    max_tokens: u32,
    output: PathBuf,
) -> VerrocchioResult<()> {
    let idea = resolve_idea(idea, idea_file.as_deref())?;
    let idea = validate::validate_idea(&idea)?;
    validate::validate_api_key(&api_key)?;

    let config = AnthropicConfig::builder()
        .api_key(api_key)
        .model(model)
        .max_tokens(max_tokens)
        .build()
        .map_err(|e| ConfigError::new(e.to_string()))?;
    let client = AnthropicClient::new(config)?;
    let runner = PipelineRunner::new(client);

    info!(output = %output.display(), "starting product development pipeline");
    let mut observer = ConsoleObserver;
    let outcome = runner.run(&idea, &mut observer).await?;

    let report = render_report(outcome.results(), outcome.total_cost());
    std::fs::write(&output, &report)
        .map_err(|e| ConfigError::new(format!("write {}: {}", output.display(), e)))?;

    info!(
        total_cost = outcome.total_cost(),
        stages = outcome.results().len(),
        "pipeline complete"
    );
    eprintln!("Report written to {}", output.display());
    eprintln!("Total API cost: ${:.4}", outcome.total_cost());
    Ok(())
}

fn resolve_idea(idea: Option<String>, idea_file: Option<&Path>) -> VerrocchioResult<String> {
    match (idea, idea_file) {
        (Some(idea), _) => Ok(idea),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("read {}: {}", path.display(), e)).into()),
        (None, None) => {
            Err(ConfigError::new("provide a product idea via --idea or --idea-file").into())
        }
    }
}
