//! LLM types — provider-neutral message types, errors, and the streaming
//! gateway trait shared by the Anthropic and `OpenAI` clients.

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// An event in the provider's stream could not be interpreted.
    #[error("API stream parse failed: {0}")]
    ApiParse(String),

    /// The provider's stream failed after headers were received.
    #[error("API stream failed: {0}")]
    Stream(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Conversation role. The wire contract only knows the two turn-taking
/// roles; the system prompt travels out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single role-tagged message, as sent to `POST /chat` and forwarded
/// verbatim to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

// =============================================================================
// STREAMING GATEWAY TRAIT
// =============================================================================

/// Ordered stream of decoded text deltas from a completion provider.
pub type TextDeltaStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// Streaming chat interface implemented by concrete provider clients and the
/// dispatching [`crate::llm::LlmClient`]. Handlers hold this as a trait
/// object so tests can substitute a scripted gateway.
#[async_trait::async_trait]
pub trait CompletionStream: Send + Sync {
    /// Open one completion exchange and return its text-delta stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider request fails or the provider
    /// responds with a non-success status before any delta is produced.
    async fn stream_chat(
        &self,
        max_tokens: u32,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<TextDeltaStream, LlmError>;
}
