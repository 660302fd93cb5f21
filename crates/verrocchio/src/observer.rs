//! Console observer for pipeline progress and cost.

use verrocchio_pipeline::{PipelineObserver, ProgressUpdate};

/// Prints progress and the running API cost to stderr as the run advances.
///
/// Output goes to stderr so the report itself can be piped from stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn on_progress(&mut self, update: &ProgressUpdate) {
        eprintln!(
            "[{:>3.0}%] Step {}/5: {}",
            update.percent,
            update.step_index + 1,
            update.status
        );
    }

    fn on_cost(&mut self, total: f64) {
        eprintln!("       API cost so far: ${:.4}", total);
    }
}
