//! Malformed response error types.

/// Well-formed HTTP response missing expected payload fields.
///
/// Raised when the API returns success but the body lacks the content
/// blocks or usage counters the pipeline depends on.
#[derive(Debug, Clone)]
pub struct ResponseError {
    /// Description of the missing or malformed field
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ResponseError {
    /// Create a new ResponseError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Response Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ResponseError {}
