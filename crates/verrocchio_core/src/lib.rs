//! Core data types for the Verrocchio pipeline library.
//!
//! This crate provides the data types shared across the Verrocchio workspace
//! and the Anthropic Messages API client used to execute generation requests.

mod anthropic;
mod driver;
mod generation;
mod role;
mod usage;

pub use anthropic::{
    AnthropicClient, AnthropicConfig, AnthropicConfigBuilder, AnthropicContentBlock,
    AnthropicMessage, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
pub use driver::ModelDriver;
pub use generation::Generation;
pub use role::Role;
pub use usage::{CostLedger, TokenUsage, INPUT_TOKEN_COST, OUTPUT_TOKEN_COST};
