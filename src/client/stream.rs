//! Stream consumer — ordered chunk decode and publish loop.
//!
//! DESIGN
//! ======
//! The response body is plain concatenated UTF-8 text with no framing.
//! Each chunk is decoded incrementally and appended to one growing buffer,
//! and the whole buffer is published after every chunk, so any observer
//! sees a prefix-consistent, monotonically growing string. The consumer
//! has no timeout of its own; dropping the future stops further reads.

use bytes::Bytes;
use futures::{Stream, StreamExt};

use super::decode::Utf8Accumulator;

/// Errors raised while driving one chat exchange from the widget side.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent at all.
    #[error("request failed: {0}")]
    Request(String),

    /// The chat endpoint answered with a non-success status.
    #[error("chat endpoint returned status {status}")]
    Status { status: u16 },

    /// The response carried no readable stream.
    #[error("response has no readable stream")]
    StreamUnavailable,

    /// The stream failed after it had started.
    #[error("response stream failed: {0}")]
    Stream(String),
}

/// Consume a byte stream to completion, publishing the accumulated text
/// after every chunk. Returns the final buffer.
///
/// A zero-chunk stream completes with an empty buffer and no publishes.
///
/// # Errors
///
/// `StreamUnavailable` when no stream handle was provided; `Stream` when a
/// chunk read fails, in which case the buffer published so far is the last
/// state the observer saw.
pub async fn consume<S, E, F>(stream: Option<S>, mut publish: F) -> Result<String, ClientError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
    F: FnMut(&str),
{
    let Some(mut stream) = stream else {
        return Err(ClientError::StreamUnavailable);
    };

    let mut decoder = Utf8Accumulator::new();
    let mut buffer = String::new();

    // Chunks are awaited strictly in order; the next read only starts after
    // this chunk's decode-and-publish step completes.
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|e| ClientError::Stream(e.to_string()))?;
        buffer.push_str(&decoder.push(&bytes));
        publish(&buffer);
    }

    if decoder.pending() > 0 {
        // Truncated trailing sequence: dropped, not replaced.
        tracing::debug!(bytes = decoder.pending(), "stream ended inside a multi-byte character");
    }

    Ok(buffer)
}

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;
