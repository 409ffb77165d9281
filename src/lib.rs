//! foliochat — the systems core of a portfolio website's chat assistant.
//!
//! Two halves share this crate: the server binary (axum routes proxying a
//! streamed LLM completion, plus the password gate) and the widget-core
//! library (`client`) holding the conversation state machine and the
//! incremental stream consumer the chat UI is built on.

pub mod client;
pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
