//! Progress reporting for pipeline runs.

use crate::Stage;

/// Number of stages counted by the progress indicator.
///
/// The summary stage executes but is not counted, so the indicator reaches
/// 100% one stage before the run completes.
pub const TRACKED_STAGE_COUNT: usize = 5;

/// Progress percentage after advancing to the given tracked step.
///
/// # Examples
///
/// ```
/// use verrocchio_pipeline::percent_complete;
///
/// assert_eq!(percent_complete(0), 0.0);
/// assert_eq!(percent_complete(2), 50.0);
/// assert_eq!(percent_complete(4), 100.0);
/// ```
pub fn percent_complete(step_index: usize) -> f64 {
    step_index as f64 / (TRACKED_STAGE_COUNT - 1) as f64 * 100.0
}

/// Progress state emitted before each tracked stage executes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Zero-based index of the tracked stage about to run.
    pub step_index: usize,
    /// Progress percentage for this step.
    pub percent: f64,
    /// The stage about to run.
    pub stage: Stage,
    /// Human status message for display.
    pub status: &'static str,
}

/// Observer for pipeline side effects that are visible before completion.
///
/// The runner reports progress before each tracked stage and the running
/// cost total after every successful call, summary included.
pub trait PipelineObserver {
    /// Called before each tracked stage executes.
    fn on_progress(&mut self, update: &ProgressUpdate) {
        let _ = update;
    }

    /// Called with the updated running total after each successful call.
    fn on_cost(&mut self, total: f64) {
        let _ = total;
    }
}

/// Observer that ignores all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl PipelineObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_exact_at_the_endpoints() {
        assert_eq!(percent_complete(0), 0.0);
        assert_eq!(percent_complete(4), 100.0);
    }

    #[test]
    fn percent_steps_by_quarters() {
        assert_eq!(percent_complete(1), 25.0);
        assert_eq!(percent_complete(2), 50.0);
        assert_eq!(percent_complete(3), 75.0);
    }
}
