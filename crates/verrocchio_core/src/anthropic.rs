//! Anthropic Messages API types and client.

use crate::{Generation, ModelDriver, Role, TokenUsage};
use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use verrocchio_error::{ApiError, ConfigError, HttpError, JsonError, ResponseError, VerrocchioResult};

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Default maximum output tokens per request.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic message content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[getter(skip)]
    text: String,
}

impl AnthropicContentBlock {
    /// Creates a new text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }

    /// Gets the text content.
    pub fn text_content(&self) -> &str {
        &self.text
    }
}

/// Anthropic API request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicMessage {
    role: Role,
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a user message holding a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![AnthropicContentBlock::text(text)],
        }
    }
}

/// Anthropic API request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a builder for AnthropicRequest.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic API response usage stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    input_tokens: u64,
    output_tokens: u64,
}

impl From<&AnthropicUsage> for TokenUsage {
    fn from(usage: &AnthropicUsage) -> Self {
        TokenUsage::new(usage.input_tokens, usage.output_tokens)
    }
}

/// Anthropic API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    id: String,
    #[serde(rename = "type")]
    response_type: String,
    role: String,
    content: Vec<AnthropicContentBlock>,
    model: String,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

/// Anthropic API configuration.
///
/// # Examples
///
/// ```
/// use verrocchio_core::AnthropicConfig;
///
/// let config = AnthropicConfig::builder()
///     .api_key("sk-ant-test")
///     .build()
///     .unwrap();
/// assert_eq!(config.model(), "claude-3-haiku-20240307");
/// ```
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    api_key: String,
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
}

impl AnthropicConfig {
    /// Creates a builder for AnthropicConfig.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }
}

/// Anthropic HTTP client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: AnthropicConfig) -> VerrocchioResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Sends a generation request to the Anthropic Messages API.
    #[tracing::instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: AnthropicRequest) -> VerrocchioResult<AnthropicResponse> {
        let url = format!("{}/v1/messages", self.config.endpoint());

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Anthropic API returned an error");
            return Err(ApiError::new(status.as_u16(), body).into());
        }

        response
            .json::<AnthropicResponse>()
            .await
            .map_err(|e| JsonError::new(e.to_string()).into())
    }
}

#[async_trait]
impl ModelDriver for AnthropicClient {
    async fn generate(&self, prompt: &str) -> VerrocchioResult<Generation> {
        let request = AnthropicRequest::builder()
            .model(self.config.model())
            .max_tokens(*self.config.max_tokens())
            .messages(vec![AnthropicMessage::user(prompt)])
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        let response = self.send(request).await?;

        let text = response
            .content()
            .first()
            .map(|block| block.text_content().to_string())
            .ok_or_else(|| ResponseError::new("response contained no content blocks"))?;

        tracing::debug!(
            input_tokens = response.usage().input_tokens(),
            output_tokens = response.usage().output_tokens(),
            "generation complete"
        );

        Ok(Generation::new(text, TokenUsage::from(response.usage())))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_wire_format() {
        let request = AnthropicRequest::builder()
            .model(DEFAULT_MODEL)
            .max_tokens(DEFAULT_MAX_TOKENS)
            .messages(vec![AnthropicMessage::user("Hello")])
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-haiku-20240307");
        assert_eq!(json["max_tokens"], 4000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][0]["text"], "Hello");
    }

    #[test]
    fn response_deserializes_from_wire_format() {
        let body = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "Generated analysis"}],
            "model": "claude-3-haiku-20240307",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 120, "output_tokens": 340}
        }"#;

        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content()[0].text_content(), "Generated analysis");
        let usage = TokenUsage::from(response.usage());
        assert_eq!(*usage.input_tokens(), 120);
        assert_eq!(*usage.output_tokens(), 340);
    }

    #[test]
    fn config_defaults_match_original_tool() {
        let config = AnthropicConfig::builder()
            .api_key("sk-ant-test")
            .build()
            .unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(*config.max_tokens(), DEFAULT_MAX_TOKENS);
    }
}
