//! Error types for the Verrocchio pipeline library.
//!
//! This crate provides the foundation error types used throughout the
//! Verrocchio workspace. Each error struct captures its source location via
//! `#[track_caller]` so failures can be traced without a backtrace.

mod api;
mod config;
mod http;
mod json;
mod response;

pub use api::ApiError;
pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;
pub use response::ResponseError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum VerrocchioErrorKind {
    /// HTTP transport error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Non-success status from the remote API
    Api(ApiError),
    /// Well-formed response missing expected payload fields
    Response(ResponseError),
    /// Configuration or input validation error
    Config(ConfigError),
}

impl std::fmt::Display for VerrocchioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerrocchioErrorKind::Http(e) => write!(f, "{}", e),
            VerrocchioErrorKind::Json(e) => write!(f, "{}", e),
            VerrocchioErrorKind::Api(e) => write!(f, "{}", e),
            VerrocchioErrorKind::Response(e) => write!(f, "{}", e),
            VerrocchioErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Verrocchio error with kind discrimination.
///
/// Callers receive one collapsed failure description; the kind exists for
/// diagnostics and logging, not for branching.
#[derive(Debug)]
pub struct VerrocchioError(Box<VerrocchioErrorKind>);

impl VerrocchioError {
    /// Create a new error from a kind.
    pub fn new(kind: VerrocchioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VerrocchioErrorKind {
        &self.0
    }
}

impl std::fmt::Display for VerrocchioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for VerrocchioError {}

// Generic From implementation for any type that converts to VerrocchioErrorKind
impl<T> From<T> for VerrocchioError
where
    T: Into<VerrocchioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Verrocchio operations.
pub type VerrocchioResult<T> = std::result::Result<T, VerrocchioError>;
