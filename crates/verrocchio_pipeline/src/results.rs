//! Accumulated stage results for a single run.

use crate::Stage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Append-only map from stage to generated text.
///
/// Results are written once per stage as the run progresses. A failed run
/// drops its results entirely; partial results are never surfaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResults {
    entries: BTreeMap<Stage, String>,
}

impl StageResults {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the generated text for a stage.
    ///
    /// Each stage writes exactly once per run.
    pub fn insert(&mut self, stage: Stage, text: String) {
        let previous = self.entries.insert(stage, text);
        debug_assert!(previous.is_none(), "stage {stage} written twice in one run");
    }

    /// Gets the text recorded for a stage, if the stage has completed.
    pub fn get(&self, stage: Stage) -> Option<&str> {
        self.entries.get(&stage).map(String::as_str)
    }

    /// Number of completed stages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no stage has completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates completed stages in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &str)> {
        self.entries.iter().map(|(stage, text)| (*stage, text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_iterate_in_execution_order() {
        let mut results = StageResults::new();
        results.insert(Stage::Summary, "summary".to_string());
        results.insert(Stage::MarketValidation, "validation".to_string());

        let stages: Vec<Stage> = results.iter().map(|(stage, _)| stage).collect();
        assert_eq!(stages, vec![Stage::MarketValidation, Stage::Summary]);
    }

    #[test]
    fn unset_stage_reads_as_none() {
        let results = StageResults::new();
        assert!(results.get(Stage::ProductDesign).is_none());
        assert!(results.is_empty());
    }
}
