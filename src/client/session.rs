//! Session-scoped widget flags with an explicit schema.
//!
//! DESIGN
//! ======
//! The gate and intro flags live for one browser session. Instead of ad
//! hoc storage reads scattered through the UI, the schema is one serde
//! struct stored as a single JSON document under one key, with explicit
//! load/save functions. `MemoryStore` models session storage for native
//! and test builds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key for the session document.
pub const SESSION_KEY: &str = "foliochat.session";

/// Minimal string key-value store, the shape session storage exposes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store with session lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The session document schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionFlags {
    pub authenticated: bool,
    pub intro_shown: bool,
}

/// Load the flags; missing or corrupt state degrades to the defaults
/// (gate locked, intro not yet shown).
#[must_use]
pub fn load(store: &impl KeyValueStore) -> SessionFlags {
    store
        .get(SESSION_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist the flags under [`SESSION_KEY`].
pub fn save(store: &mut impl KeyValueStore, flags: SessionFlags) {
    if let Ok(raw) = serde_json::to_string(&flags) {
        store.set(SESSION_KEY, &raw);
    }
}

/// Drop the session document entirely.
pub fn clear(store: &mut impl KeyValueStore) {
    store.remove(SESSION_KEY);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
