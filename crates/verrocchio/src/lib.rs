//! Unified interface for the Verrocchio product development pipeline.
//!
//! Re-exports the member crates and provides the command-line interface
//! used by the `verrocchio` binary.

pub mod cli;
mod observer;

pub use observer::ConsoleObserver;
pub use verrocchio_core::*;
pub use verrocchio_error::*;
pub use verrocchio_pipeline::*;
