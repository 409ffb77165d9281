//! Anthropic Messages API client, streaming mode.
//!
//! Thin HTTP wrapper for `/v1/messages` with `stream: true`. Event
//! interpretation is pure (`interpret_event`) for testability; transport
//! plumbing lives in [`super::sse`].

use std::time::Duration;

use super::config::LlmTimeouts;
use super::sse::{self, Delta, SseEvent};
use super::types::{ChatMessage, LlmError, TextDeltaStream};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    pub async fn stream_chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<TextDeltaStream, LlmError> {
        let body = ApiRequest { model, max_tokens, system, messages, stream: true };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status, body: text });
        }

        Ok(sse::delta_stream(response, interpret_event))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum StreamEvent {
    #[serde(rename = "content_block_delta")]
    ContentBlockDelta { delta: BlockDelta },
    #[serde(rename = "message_stop")]
    MessageStop,
    #[serde(rename = "error")]
    Error { error: ApiError },
    #[serde(other)]
    Other,
}

#[derive(serde::Deserialize)]
struct BlockDelta {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

// =============================================================================
// EVENT INTERPRETATION
// =============================================================================

fn interpret_event(event: &SseEvent) -> Result<Delta, LlmError> {
    if event.data.is_empty() {
        return Ok(Delta::Skip);
    }

    let parsed: StreamEvent = serde_json::from_str(&event.data).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    match parsed {
        StreamEvent::ContentBlockDelta { delta } if delta.kind == "text_delta" => Ok(Delta::Text(delta.text)),
        StreamEvent::ContentBlockDelta { .. } | StreamEvent::Other => Ok(Delta::Skip),
        StreamEvent::MessageStop => Ok(Delta::Done),
        StreamEvent::Error { error } => Err(LlmError::Stream(error.message)),
    }
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
