//! Token usage and cost tracking for generation requests.

use serde::{Deserialize, Serialize};

/// Cost per input token in USD (Claude Haiku pricing: $0.25/M tokens).
pub const INPUT_TOKEN_COST: f64 = 0.000_000_25;

/// Cost per output token in USD (Claude Haiku pricing: $1.25/M tokens).
pub const OUTPUT_TOKEN_COST: f64 = 0.000_001_25;

/// Token usage counters for a completed generation.
///
/// Cost is derived from the counters, never stored independently.
///
/// # Examples
///
/// ```
/// use verrocchio_core::TokenUsage;
///
/// let usage = TokenUsage::new(1_000_000, 1_000_000);
/// assert!((usage.cost() - 0.0015).abs() < 1e-12);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct TokenUsage {
    /// Number of tokens in the input/prompt.
    input_tokens: u64,
    /// Number of tokens in the generated output.
    output_tokens: u64,
}

impl TokenUsage {
    /// Creates new token usage counters.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Creates a builder for TokenUsage.
    pub fn builder() -> TokenUsageBuilder {
        TokenUsageBuilder::default()
    }

    /// Derives the dollar cost of this usage under Claude Haiku pricing.
    pub fn cost(&self) -> f64 {
        self.input_tokens as f64 * INPUT_TOKEN_COST + self.output_tokens as f64 * OUTPUT_TOKEN_COST
    }
}

/// Running cost ledger for a single pipeline run.
///
/// Accumulates per-call cost into a running total. The total is exposed
/// immediately after each recorded call so observers can display it before
/// the run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostLedger {
    total: f64,
    calls: u64,
}

impl CostLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed call, returning the cost of that call.
    pub fn record(&mut self, usage: &TokenUsage) -> f64 {
        let cost = usage.cost();
        self.total += cost;
        self.calls += 1;
        cost
    }

    /// Running total in USD.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of calls recorded.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Formats the running total to four decimal places, as displayed to users.
    pub fn formatted_total(&self) -> String {
        format!("{:.4}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_for_a_million_tokens_each_way() {
        let usage = TokenUsage::new(1_000_000, 1_000_000);
        let expected = 0.00025 + 0.00125;
        assert!((usage.cost() - expected).abs() < 1e-12);
    }

    #[test]
    fn ledger_accumulates_across_calls() {
        let mut ledger = CostLedger::new();
        let first = ledger.record(&TokenUsage::new(1000, 500));
        let second = ledger.record(&TokenUsage::new(2000, 1000));
        assert!((ledger.total() - (first + second)).abs() < 1e-12);
        assert_eq!(ledger.calls(), 2);
    }

    #[test]
    fn formatted_total_uses_four_decimal_places() {
        let mut ledger = CostLedger::new();
        ledger.record(&TokenUsage::new(1_000_000, 1_000_000));
        assert_eq!(ledger.formatted_total(), "0.0015");
    }

    #[test]
    fn zero_usage_costs_nothing() {
        let usage = TokenUsage::new(0, 0);
        assert_eq!(usage.cost(), 0.0);
    }
}
