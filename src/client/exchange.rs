//! Exchange driver — one full submit → stream → publish cycle against
//! `POST /chat`.
//!
//! DESIGN
//! ======
//! Every failure after a submission is accepted — network error, non-2xx
//! status, stream breakage — is caught here and converted into the
//! conversation's `Error` phase with a human-readable notice. Nothing
//! propagates as a panic and nothing retries; the visitor resubmits.
//! Dropping the `send` future cancels the in-flight read loop without
//! touching conversation state again.

use std::time::Duration;

use serde_json::json;

use super::conversation::Conversation;
use super::stream::{ClientError, consume};

const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    /// Build a client for the chat endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Ok(Self { http, endpoint: format!("{}/chat", base_url.trim_end_matches('/')) })
    }

    /// Submit one user message and drive the exchange to completion.
    ///
    /// Returns `false` if the submission was rejected (blank text or an
    /// exchange already in flight). Failures do not propagate: they are
    /// recorded on the conversation as the `Error` phase.
    pub async fn send(&self, conversation: &mut Conversation, text: &str) -> bool {
        if conversation.submit(text).is_none() {
            return false;
        }
        if let Err(e) = self.run_exchange(conversation).await {
            tracing::warn!(error = %e, "chat exchange failed");
            conversation.fail(notice_for(&e));
        }
        true
    }

    async fn run_exchange(&self, conversation: &mut Conversation) -> Result<(), ClientError> {
        let payload = json!({ "messages": conversation.request_payload() });
        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16() });
        }

        let Some(id) = conversation.begin_stream() else {
            return Err(ClientError::Stream("exchange started outside the submitting phase".into()));
        };

        consume(Some(Box::pin(response.bytes_stream())), |buffer| {
            conversation.apply_chunk(id, buffer);
        })
        .await?;

        conversation.complete();
        Ok(())
    }
}

fn notice_for(error: &ClientError) -> String {
    match error {
        ClientError::Request(_) => "Could not reach the assistant. Check your connection and try again.".into(),
        ClientError::Status { status } => format!("The assistant is unavailable right now (status {status})."),
        ClientError::StreamUnavailable | ClientError::Stream(_) => {
            "The connection dropped while answering.".into()
        }
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;
