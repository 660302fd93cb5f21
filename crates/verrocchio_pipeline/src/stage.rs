//! Pipeline stage enumeration.

use serde::{Deserialize, Serialize};

/// The six stages of the product development chain, in execution order.
///
/// The first five stages drive the progress indicator. The summary stage
/// executes after the indicator has already reached 100% and never advances
/// it; this matches the behavior of the tool this pipeline reproduces.
///
/// # Examples
///
/// ```
/// use verrocchio_pipeline::Stage;
///
/// assert_eq!(Stage::SEQUENCE.len(), 6);
/// assert_eq!(Stage::MarketValidation.tracked_index(), Some(0));
/// assert_eq!(Stage::Summary.tracked_index(), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    MarketValidation,
    ProductStrategy,
    ProductDesign,
    TechnicalPlan,
    Implementation,
    Summary,
}

impl Stage {
    /// All stages in execution order.
    pub const SEQUENCE: [Stage; 6] = [
        Stage::MarketValidation,
        Stage::ProductStrategy,
        Stage::ProductDesign,
        Stage::TechnicalPlan,
        Stage::Implementation,
        Stage::Summary,
    ];

    /// Position in the progress indicator, if this stage is tracked.
    ///
    /// Summary is excluded from the step count even though it executes.
    pub fn tracked_index(&self) -> Option<usize> {
        match self {
            Stage::MarketValidation => Some(0),
            Stage::ProductStrategy => Some(1),
            Stage::ProductDesign => Some(2),
            Stage::TechnicalPlan => Some(3),
            Stage::Implementation => Some(4),
            Stage::Summary => None,
        }
    }

    /// Human status message shown while this stage runs.
    pub fn status_message(&self) -> &'static str {
        match self {
            Stage::MarketValidation => "Analyzing and validating your idea...",
            Stage::ProductStrategy => "Developing product strategy...",
            Stage::ProductDesign => "Creating product design...",
            Stage::TechnicalPlan => "Planning technical implementation...",
            Stage::Implementation => "Creating implementation code...",
            Stage::Summary => "Creating executive summary...",
        }
    }

    /// Section title used in the exported report.
    pub fn report_title(&self) -> &'static str {
        match self {
            Stage::MarketValidation => "MARKET VALIDATION",
            Stage::ProductStrategy => "PRODUCT STRATEGY",
            Stage::ProductDesign => "PRODUCT DESIGN",
            Stage::TechnicalPlan => "TECHNICAL IMPLEMENTATION PLAN",
            Stage::Implementation => "IMPLEMENTATION CODE",
            Stage::Summary => "SUMMARY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sequence_matches_declaration_order() {
        let iterated: Vec<Stage> = Stage::iter().collect();
        assert_eq!(iterated, Stage::SEQUENCE);
    }

    #[test]
    fn five_stages_are_tracked() {
        let tracked = Stage::SEQUENCE
            .iter()
            .filter(|stage| stage.tracked_index().is_some())
            .count();
        assert_eq!(tracked, 5);
    }

    #[test]
    fn stages_order_by_execution_position() {
        assert!(Stage::MarketValidation < Stage::Summary);
        assert!(Stage::TechnicalPlan < Stage::Implementation);
    }
}
