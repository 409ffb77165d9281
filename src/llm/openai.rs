//! OpenAI-compatible API client, streaming mode.
//!
//! Streams `/chat/completions` with `stream: true`. The base URL is
//! configurable so OpenAI-compatible gateways work unchanged.

use std::time::Duration;

use serde::Serialize;

use super::config::LlmTimeouts;
use super::sse::{self, Delta, SseEvent};
use super::types::{ChatMessage, LlmError, TextDeltaStream};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub async fn stream_chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<TextDeltaStream, LlmError> {
        let msgs = build_wire_messages(system, messages);
        let body = ApiRequest { model, max_tokens, messages: &msgs, stream: true };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
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

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

fn build_wire_messages<'a>(system: &'a str, messages: &'a [ChatMessage]) -> Vec<WireMessage<'a>> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(WireMessage { role: "system", content: system });
    out.extend(
        messages
            .iter()
            .map(|m| WireMessage { role: m.role.as_str(), content: &m.content }),
    );
    out
}

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [WireMessage<'a>],
    stream: bool,
}

#[derive(serde::Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(serde::Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: ChoiceDelta,
}

#[derive(serde::Deserialize, Default)]
struct ChoiceDelta {
    #[serde(default)]
    content: Option<String>,
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
    let data = event.data.trim();
    if data.is_empty() {
        return Ok(Delta::Skip);
    }
    if data == "[DONE]" {
        return Ok(Delta::Done);
    }

    let chunk: StreamChunk = serde_json::from_str(data).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    if let Some(error) = chunk.error {
        return Err(LlmError::Stream(error.message));
    }

    let text = chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content);
    match text {
        Some(text) if !text.is_empty() => Ok(Delta::Text(text)),
        _ => Ok(Delta::Skip),
    }
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
