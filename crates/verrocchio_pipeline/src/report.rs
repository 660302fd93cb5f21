//! Plain-text report rendering.
//!
//! The exported artifact keeps the exact section order, titles, and
//! underline lengths of the original download format, so existing consumers
//! of the file see identical output.

use crate::{Stage, StageResults};

/// Default file name for the exported report.
pub const REPORT_FILE_NAME: &str = "product-development-results.txt";

// Report section order differs from execution order: the summary leads.
const SECTION_ORDER: [Stage; 6] = [
    Stage::Summary,
    Stage::MarketValidation,
    Stage::ProductStrategy,
    Stage::ProductDesign,
    Stage::TechnicalPlan,
    Stage::Implementation,
];

// Underlines are fixed strings: the original's lengths are irregular and
// consumers of the file expect them byte for byte.
fn underline(stage: Stage) -> &'static str {
    match stage {
        Stage::Summary => "-------",
        Stage::MarketValidation => "----------------",
        Stage::ProductStrategy => "---------------",
        Stage::ProductDesign => "-------------",
        Stage::TechnicalPlan => "----------------------------",
        Stage::Implementation => "------------------",
    }
}

/// Renders the full report for a run.
///
/// Every section header appears even when its text is empty.
pub fn render_report(results: &StageResults, total_cost: f64) -> String {
    let mut content = String::new();
    content.push_str("PRODUCT DEVELOPMENT RESULTS\n");
    content.push_str("========================\n\n");

    for stage in SECTION_ORDER {
        content.push_str(stage.report_title());
        content.push('\n');
        content.push_str(underline(stage));
        content.push('\n');
        content.push_str(results.get(stage).unwrap_or(""));
        content.push_str("\n\n");
    }

    content.push_str("API COST SUMMARY\n");
    content.push_str("--------------\n");
    content.push_str(&format!("Total API Cost: ${:.4}\n", total_cost));

    content
}
