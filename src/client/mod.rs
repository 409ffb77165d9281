//! Chat widget core — the client half of the streaming chat exchange.
//!
//! ARCHITECTURE
//! ============
//! Pure state (conversation machine, panel reducer, scroll-spy, session
//! flags) is separated from transport (exchange driver, stream consumer)
//! so every piece tests without a browser or a network. The UI layer owns
//! the conversation and the loading flag; the stream consumer only ever
//! mutates the single assistant message it was handed.

pub mod conversation;
pub mod decode;
pub mod exchange;
pub mod nav;
pub mod panel;
pub mod session;
pub mod stream;
