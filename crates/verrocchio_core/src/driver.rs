//! Driver trait for text-generation backends.

use crate::Generation;
use async_trait::async_trait;
use verrocchio_error::VerrocchioResult;

/// Trait for backends that turn a prompt into generated text.
///
/// The pipeline runner is generic over this trait so tests can substitute a
/// mock driver for the Anthropic client.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Sends a single user prompt and returns the generated text with usage.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// malformed response payload.
    async fn generate(&self, prompt: &str) -> VerrocchioResult<Generation>;

    /// Name of the provider backing this driver.
    fn provider_name(&self) -> &'static str;

    /// Model identifier this driver sends requests to.
    fn model_name(&self) -> &str;
}
