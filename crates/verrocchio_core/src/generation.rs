//! Generation results returned by model drivers.

use crate::TokenUsage;
use serde::{Deserialize, Serialize};

/// Text generated by a model call, with the token usage it consumed.
///
/// # Examples
///
/// ```
/// use verrocchio_core::{Generation, TokenUsage};
///
/// let generation = Generation::new("Hello!", TokenUsage::new(10, 5));
/// assert_eq!(generation.text(), "Hello!");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Generation {
    /// The generated text (first content block of the response).
    text: String,
    /// Token usage counters reported by the provider.
    usage: TokenUsage,
}

impl Generation {
    /// Creates a new generation result.
    pub fn new(text: impl Into<String>, usage: TokenUsage) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }

    /// Creates a builder for Generation.
    pub fn builder() -> GenerationBuilder {
        GenerationBuilder::default()
    }
}
