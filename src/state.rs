//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the profile document, the optional streaming LLM client, and
//! the optional password gate. There is no database: conversations live in
//! the visitor's browser session and are never persisted.

use std::sync::Arc;

use crate::llm::CompletionStream;
use crate::services::gate::GateConfig;
use crate::services::prompt::Profile;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn CompletionStream>>,
    /// Optional password gate. `None` means open access.
    pub gate: Option<GateConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(profile: Profile, llm: Option<Arc<dyn CompletionStream>>, gate: Option<GateConfig>) -> Self {
        Self { profile: Arc::new(profile), llm, gate }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
