//! Chat route — validates the conversation payload and proxies the
//! upstream completion stream to the client as raw `text/plain`.
//!
//! DESIGN
//! ======
//! The response body carries no framing: it is the concatenation of the
//! upstream text deltas, re-chunked however the transport pleases. A pump
//! task forwards deltas into a bounded channel; client disconnect drops
//! the receiver, which ends the pump and stops upstream reads. A
//! wall-clock deadline bounds the whole request — hitting it aborts the
//! body mid-stream so the client observes a failed fetch rather than a
//! silently truncated answer.

use std::sync::OnceLock;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use bytes::Bytes;
use futures::StreamExt;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::wrappers::ReceiverStream;

use crate::llm::types::{ChatMessage, TextDeltaStream};
use crate::services::prompt;
use crate::state::AppState;

const DEFAULT_CHAT_DEADLINE_SECS: u64 = 30;
const DEFAULT_CHAT_MAX_TOKENS: u32 = 1024;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn chat_deadline() -> Duration {
    static VALUE: OnceLock<u64> = OnceLock::new();
    Duration::from_secs(*VALUE.get_or_init(|| env_parse("CHAT_DEADLINE_SECS", DEFAULT_CHAT_DEADLINE_SECS)))
}

fn chat_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("CHAT_MAX_TOKENS", DEFAULT_CHAT_MAX_TOKENS))
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Parse and validate the request body. Pure for testability.
pub(crate) fn parse_chat_request(body: &Value) -> Result<Vec<ChatMessage>, &'static str> {
    let Some(raw) = body.get("messages").and_then(Value::as_array) else {
        return Err("messages array is required");
    };
    if raw.is_empty() {
        return Err("messages array is required");
    }

    let mut messages = Vec::with_capacity(raw.len());
    for value in raw {
        let message: ChatMessage =
            serde_json::from_value(value.clone()).map_err(|_| "invalid message in messages array")?;
        messages.push(message);
    }
    Ok(messages)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /chat` — stream the assistant's reply as raw UTF-8 text.
pub async fn chat(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let messages = match parse_chat_request(&body) {
        Ok(messages) => messages,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    let Some(llm) = state.llm.clone() else {
        tracing::error!("chat requested but no LLM client is configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "assistant is not available");
    };

    let system = prompt::build_prompt(&state.profile, None);
    let deadline = Instant::now() + chat_deadline();

    let deltas =
        match tokio::time::timeout_at(deadline, llm.stream_chat(chat_max_tokens(), &system, &messages)).await {
            Ok(Ok(deltas)) => deltas,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "upstream completion request failed");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream request failed");
            }
            Err(_) => {
                tracing::warn!("chat deadline reached before upstream responded");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream request timed out");
            }
        };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        proxy_body(deltas, deadline),
    )
        .into_response()
}

// =============================================================================
// STREAM PUMP
// =============================================================================

#[derive(Debug, thiserror::Error)]
enum ProxyError {
    #[error("upstream stream failed")]
    Upstream,
    #[error("response deadline exceeded")]
    DeadlineExceeded,
}

fn proxy_body(mut deltas: TextDeltaStream, deadline: Instant) -> Body {
    let (tx, rx) = mpsc::channel::<Result<Bytes, ProxyError>>(16);

    tokio::spawn(async move {
        loop {
            let next = tokio::select! {
                () = tokio::time::sleep_until(deadline) => {
                    tracing::warn!("chat deadline reached mid-stream, aborting response");
                    let _ = tx.send(Err(ProxyError::DeadlineExceeded)).await;
                    return;
                }
                next = deltas.next() => next,
            };

            match next {
                Some(Ok(text)) => {
                    // Send failure means the client went away; stop reading upstream.
                    if tx.send(Ok(Bytes::from(text))).await.is_err() {
                        return;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "upstream stream failed mid-response");
                    let _ = tx.send(Err(ProxyError::Upstream)).await;
                    return;
                }
                None => return,
            }
        }
    });

    Body::from_stream(ReceiverStream::new(rx))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
