//! Incremental server-sent-events parsing and the shared delta pump.
//!
//! DESIGN
//! ======
//! Both providers deliver completions as an SSE byte stream whose chunk
//! boundaries are arbitrary: an event, a line, or even a multi-byte UTF-8
//! character may be split across reads. `SseParser` buffers raw bytes and
//! only decodes complete lines — a 0x0A byte never occurs inside a
//! multi-byte UTF-8 sequence, so splitting on raw newlines before decoding
//! is safe. Provider-specific JSON interpretation stays in pure functions
//! for testability.

use std::collections::VecDeque;

use futures::stream;

use super::types::{LlmError, TextDeltaStream};

// =============================================================================
// EVENT PARSER
// =============================================================================

/// One dispatched SSE event: optional `event:` name plus joined `data:` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: Option<String>,
    pub data: String,
}

/// Stateful SSE parser. Feed it raw bytes; complete events come out.
#[derive(Debug, Default)]
pub struct SseParser {
    buf: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one transport chunk, returning every event completed by it.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buf.extend_from_slice(bytes);

        let mut out = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line).into_owned();
            self.feed_line(&line, &mut out);
        }
        out
    }

    fn feed_line(&mut self, line: &str, out: &mut Vec<SseEvent>) {
        if line.is_empty() {
            if self.event.is_some() || !self.data.is_empty() {
                out.push(SseEvent { event: self.event.take(), data: self.data.join("\n") });
                self.data.clear();
            }
            return;
        }
        if line.starts_with(':') {
            return;
        }
        if let Some(value) = line.strip_prefix("event:") {
            self.event = Some(value.strip_prefix(' ').unwrap_or(value).to_owned());
        } else if let Some(value) = line.strip_prefix("data:") {
            self.data
                .push(value.strip_prefix(' ').unwrap_or(value).to_owned());
        }
        // Other fields (id:, retry:) are irrelevant to completion streams.
    }
}

// =============================================================================
// DELTA PUMP
// =============================================================================

/// Provider verdict for one parsed SSE event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    /// A decoded text fragment to forward.
    Text(String),
    /// The provider signalled end of stream; stop reading.
    Done,
    /// Housekeeping event with no text payload.
    Skip,
}

struct PumpState {
    response: reqwest::Response,
    parser: SseParser,
    pending: VecDeque<String>,
    done: bool,
}

/// Turn a streaming HTTP response into an ordered text-delta stream.
///
/// Chunks are read strictly in sequence; dropping the returned stream stops
/// further reads. `extract` interprets each SSE event for its provider.
pub(crate) fn delta_stream<F>(response: reqwest::Response, extract: F) -> TextDeltaStream
where
    F: Fn(&SseEvent) -> Result<Delta, LlmError> + Send + Sync + 'static,
{
    let state = PumpState { response, parser: SseParser::new(), pending: VecDeque::new(), done: false };

    Box::pin(stream::try_unfold((state, extract), |(mut state, extract)| async move {
        loop {
            if let Some(text) = state.pending.pop_front() {
                return Ok(Some((text, (state, extract))));
            }
            if state.done {
                return Ok(None);
            }

            let chunk = state
                .response
                .chunk()
                .await
                .map_err(|e| LlmError::Stream(e.to_string()))?;
            let Some(bytes) = chunk else {
                return Ok(None);
            };

            for event in state.parser.push(&bytes) {
                match extract(&event)? {
                    Delta::Text(text) => state.pending.push_back(text),
                    Delta::Done => state.done = true,
                    Delta::Skip => {}
                }
            }
        }
    }))
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
