//! Sequential pipeline execution.
//!
//! The runner processes the six stages in order against a model driver,
//! threading each stage's output into later prompts. Any failure aborts the
//! run immediately; nothing downstream executes and no partial results are
//! returned.

use crate::{build_prompt, percent_complete, PipelineObserver, ProgressUpdate, Stage, StageResults};
use derive_getters::Getters;
use verrocchio_core::{CostLedger, ModelDriver};
use verrocchio_error::VerrocchioResult;

/// Completed pipeline run: all six results plus the accumulated cost.
#[derive(Debug, Clone, Getters)]
pub struct RunOutcome {
    /// Generated text for each of the six stages.
    results: StageResults,
    /// Accumulated API cost for the run.
    cost: CostLedger,
}

impl RunOutcome {
    /// Total API cost in USD.
    pub fn total_cost(&self) -> f64 {
        self.cost.total()
    }
}

/// Executes the product development chain against a model driver.
///
/// Stages run strictly one after another; the runner suspends only at each
/// network call boundary. There is no retry, no parallelism, and no state
/// machine beyond the linear stage order.
pub struct PipelineRunner<D: ModelDriver> {
    driver: D,
}

impl<D: ModelDriver> PipelineRunner<D> {
    /// Creates a new runner with the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Gets a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Runs all six stages for the given idea.
    ///
    /// The observer receives a progress update before each tracked stage and
    /// the updated running cost after every successful call. The caller is
    /// expected to have validated the idea already (see [`crate::validate`]).
    ///
    /// # Errors
    ///
    /// The first transport failure, non-success status, or malformed
    /// response aborts the run and surfaces as the run's single error.
    #[tracing::instrument(skip_all, fields(provider = self.driver.provider_name(), model = %self.driver.model_name()))]
    pub async fn run(
        &self,
        idea: &str,
        observer: &mut dyn PipelineObserver,
    ) -> VerrocchioResult<RunOutcome> {
        let mut results = StageResults::new();
        let mut cost = CostLedger::new();

        for stage in Stage::SEQUENCE {
            if let Some(step_index) = stage.tracked_index() {
                let update = ProgressUpdate {
                    step_index,
                    percent: percent_complete(step_index),
                    stage,
                    status: stage.status_message(),
                };
                observer.on_progress(&update);
                tracing::info!(
                    stage = %stage,
                    step = step_index,
                    percent = update.percent,
                    "starting stage"
                );
            } else {
                tracing::info!(stage = %stage, "starting untracked stage");
            }

            let prompt = build_prompt(stage, idea, &results);
            let generation = self.driver.generate(&prompt).await?;

            let call_cost = cost.record(generation.usage());
            observer.on_cost(cost.total());
            tracing::debug!(
                stage = %stage,
                call_cost,
                total_cost = cost.total(),
                response_chars = generation.text().len(),
                "stage complete"
            );

            results.insert(stage, generation.text().clone());
        }

        Ok(RunOutcome { results, cost })
    }
}
