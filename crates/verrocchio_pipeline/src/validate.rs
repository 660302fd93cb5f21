//! Input validation for pipeline runs.
//!
//! The runner assumes validated inputs; callers validate before invoking.

use verrocchio_error::{ConfigError, VerrocchioResult};

/// Credential prefix recognized for Anthropic API keys.
pub const RECOGNIZED_KEY_PREFIX: &str = "sk-ant-";

/// Validates and trims the product idea.
///
/// # Errors
///
/// Returns an error if the idea is empty after trimming.
pub fn validate_idea(idea: &str) -> VerrocchioResult<String> {
    let trimmed = idea.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::new("product idea must not be empty").into());
    }
    Ok(trimmed.to_string())
}

/// Validates the API key against the recognized credential prefix.
///
/// # Errors
///
/// Returns an error if the key is empty or carries an unrecognized prefix.
pub fn validate_api_key(api_key: &str) -> VerrocchioResult<()> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() || !trimmed.starts_with(RECOGNIZED_KEY_PREFIX) {
        return Err(ConfigError::new(format!(
            "API key must start with '{RECOGNIZED_KEY_PREFIX}'"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_is_trimmed() {
        assert_eq!(validate_idea("  a brilliant app  ").unwrap(), "a brilliant app");
    }

    #[test]
    fn whitespace_only_idea_is_rejected() {
        assert!(validate_idea("   \n\t ").is_err());
    }

    #[test]
    fn key_with_recognized_prefix_passes() {
        assert!(validate_api_key("sk-ant-api03-xyz").is_ok());
    }

    #[test]
    fn key_with_wrong_prefix_is_rejected() {
        assert!(validate_api_key("sk-openai-xyz").is_err());
        assert!(validate_api_key("").is_err());
    }
}
