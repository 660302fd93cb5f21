//! Remote API error types.

/// Non-success response from the remote text-generation API.
///
/// # Examples
///
/// ```
/// use verrocchio_error::ApiError;
///
/// let err = ApiError::new(429, "rate limited");
/// assert_eq!(err.status, 429);
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code returned by the API
    pub status: u16,
    /// Response body or error description
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with the given status and message at the current location.
    #[track_caller]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API Error: status {}: {} at line {} in {}",
            self.status, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ApiError {}
