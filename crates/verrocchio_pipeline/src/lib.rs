//! Chained prompt pipeline engine for Verrocchio.
//!
//! This crate drives the six-stage product development chain: each stage
//! builds its prompt from the outputs of earlier stages, calls the model
//! driver, and records the result. Execution is strictly sequential and
//! fail-fast.

mod progress;
mod prompt;
mod report;
mod results;
mod runner;
mod stage;
pub mod validate;

pub use progress::{percent_complete, NullObserver, PipelineObserver, ProgressUpdate, TRACKED_STAGE_COUNT};
pub use prompt::{build_prompt, SUMMARY_EXCERPT_CHARS};
pub use report::{render_report, REPORT_FILE_NAME};
pub use results::StageResults;
pub use runner::{PipelineRunner, RunOutcome};
pub use stage::Stage;
