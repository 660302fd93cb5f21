//! Prompt templates for each pipeline stage.
//!
//! Each builder is a pure function from the idea and prior stage results to
//! prompt text. Stage N only ever reads results from stages earlier than N.

use crate::{Stage, StageResults};

/// Number of characters of each document excerpted into the summary prompt.
pub const SUMMARY_EXCERPT_CHARS: usize = 500;

/// Builds the prompt for a stage from the idea and prior results.
///
/// Prior results that have not been recorded substitute as empty text; the
/// runner only invokes a stage once everything it references has completed.
pub fn build_prompt(stage: Stage, idea: &str, results: &StageResults) -> String {
    let prior = |stage: Stage| results.get(stage).unwrap_or("");
    match stage {
        Stage::MarketValidation => market_validation_prompt(idea),
        Stage::ProductStrategy => product_strategy_prompt(prior(Stage::MarketValidation)),
        Stage::ProductDesign => product_design_prompt(prior(Stage::ProductStrategy)),
        Stage::TechnicalPlan => {
            technical_plan_prompt(prior(Stage::ProductStrategy), prior(Stage::ProductDesign))
        }
        Stage::Implementation => implementation_prompt(prior(Stage::TechnicalPlan)),
        Stage::Summary => summary_prompt(
            prior(Stage::MarketValidation),
            prior(Stage::ProductStrategy),
            prior(Stage::ProductDesign),
            prior(Stage::TechnicalPlan),
        ),
    }
}

/// Truncates text to the summary excerpt length on a char boundary.
fn excerpt(text: &str) -> String {
    text.chars().take(SUMMARY_EXCERPT_CHARS).collect()
}

fn market_validation_prompt(idea: &str) -> String {
    format!(
        r#"
You are a skilled Market Research Analyst on a product development team. Analyze this product idea:

{idea}

Create a concise market validation analysis that includes:
1. Market viability and potential
2. Target audience and their specific needs
3. Market size and growth potential
4. Current competitors and their weaknesses
5. Potential barriers to entry
6. Revenue potential and timeline to profitability

Format your response as a professional market analysis report. Be concise but thorough.
"#
    )
}

fn product_strategy_prompt(market_validation: &str) -> String {
    format!(
        r#"
You are an experienced Product Strategist. Based on this market validation analysis:

{market_validation}

Develop a focused product strategy that includes:
1. Clear product vision and value proposition (1-2 sentences)
2. Core features for the MVP (list only 3-5 essential features)
3. Key differentiators from competitors (1-2 points)
4. Go-to-market strategy (very brief)
5. Timeline for development and launch (compressed and realistic)

Be extremely specific and practical about the product's functionality.
Format your response as a professional product strategy document.
"#
    )
}

fn product_design_prompt(product_strategy: &str) -> String {
    format!(
        r#"
You are a talented Product Designer. Based on this product strategy:

{product_strategy}

Create a streamlined product design document that includes:
1. 1 primary user persona with basic demographics, goals and pain points
2. Simple user flow diagram (describe it in text)
3. List of key screens/pages (no more than 5)
4. For each screen, list ONLY:
   - Purpose of the screen
   - Key elements/components
   - Primary user actions

Focus on creating a minimal, intuitive user experience that directly addresses user needs.
Format your response as a professional product design document.
"#
    )
}

fn technical_plan_prompt(product_strategy: &str, product_design: &str) -> String {
    format!(
        r#"
You are a skilled Software Engineer. Based on this product strategy and design:

Product Strategy:
{product_strategy}

Product Design:
{product_design}

Develop a lean technical implementation plan that includes:
1. Technology stack (choose FREE, widely-used technologies only)
   - Frontend: HTML/CSS/JavaScript with minimal frameworks
   - Backend: If needed, choose the simplest possible solution
   - Data storage: Local storage or simple free tier options
2. System architecture (keep it extremely simple)
3. Development approach (focus on rapid implementation)
4. Key technical challenges and simple solutions

Focus on creating the most minimal implementation that delivers the core value.
Format your response as a professional technical specification document.
"#
    )
}

fn implementation_prompt(technical_plan: &str) -> String {
    format!(
        r#"
You are an expert Software Engineer. Based on this technical plan:

{technical_plan}

Create the actual MVP code for the product. Focus on:
1. The main HTML structure (index.html)
2. Basic CSS styling (style.css)
3. Core JavaScript functionality (script.js)

Provide complete, working code files that implement the core functionality described in the technical plan.
Each file should be properly formatted and ready to use.

Format your response with clear file headers like:
--- index.html ---
(code here)

--- style.css ---
(code here)

--- script.js ---
(code here)
"#
    )
}

fn summary_prompt(
    market_validation: &str,
    product_strategy: &str,
    product_design: &str,
    technical_plan: &str,
) -> String {
    format!(
        r#"
You are a Project Manager overseeing a product development team. Based on all the work done:

Market Validation:
{}...

Product Strategy:
{}...

Product Design:
{}...

Technical Plan:
{}...

Create an executive summary of the product (1 page maximum) that includes:
1. Product overview and key value proposition
2. Target market and opportunity size
3. Core features and differentiators
4. Technical implementation approach
5. Next steps for launch

Format this as a professional executive summary that a stakeholder could quickly read to understand the entire project.
"#,
        excerpt(market_validation),
        excerpt(product_strategy),
        excerpt(product_design),
        excerpt(technical_plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_with(entries: &[(Stage, &str)]) -> StageResults {
        let mut results = StageResults::new();
        for (stage, text) in entries {
            results.insert(*stage, text.to_string());
        }
        results
    }

    #[test]
    fn first_stage_embeds_the_idea() {
        let prompt = build_prompt(Stage::MarketValidation, "a todo app", &StageResults::new());
        assert!(prompt.contains("a todo app"));
        assert!(prompt.contains("Market Research Analyst"));
    }

    #[test]
    fn each_stage_embeds_its_predecessor() {
        let results = results_with(&[
            (Stage::MarketValidation, "VALIDATION TEXT"),
            (Stage::ProductStrategy, "STRATEGY TEXT"),
            (Stage::ProductDesign, "DESIGN TEXT"),
            (Stage::TechnicalPlan, "PLAN TEXT"),
        ]);

        assert!(build_prompt(Stage::ProductStrategy, "", &results).contains("VALIDATION TEXT"));
        assert!(build_prompt(Stage::ProductDesign, "", &results).contains("STRATEGY TEXT"));
        let technical = build_prompt(Stage::TechnicalPlan, "", &results);
        assert!(technical.contains("STRATEGY TEXT"));
        assert!(technical.contains("DESIGN TEXT"));
        assert!(build_prompt(Stage::Implementation, "", &results).contains("PLAN TEXT"));
    }

    #[test]
    fn summary_excerpts_long_documents() {
        let long = "x".repeat(2000);
        let results = results_with(&[
            (Stage::MarketValidation, long.as_str()),
            (Stage::ProductStrategy, "short strategy"),
            (Stage::ProductDesign, "short design"),
            (Stage::TechnicalPlan, "short plan"),
        ]);

        let prompt = build_prompt(Stage::Summary, "", &results);
        let expected_excerpt = format!("{}...", "x".repeat(SUMMARY_EXCERPT_CHARS));
        assert!(prompt.contains(&expected_excerpt));
        assert!(!prompt.contains(&"x".repeat(SUMMARY_EXCERPT_CHARS + 1)));
        assert!(prompt.contains("short strategy..."));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let text = "é".repeat(SUMMARY_EXCERPT_CHARS + 10);
        let truncated = excerpt(&text);
        assert_eq!(truncated.chars().count(), SUMMARY_EXCERPT_CHARS);
    }
}
