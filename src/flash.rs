//! Session-scoped one-shot flash messages.
//!
//! A handler queues a confirmation here after a successful mutation; the next
//! page render in the same session drains it. The store is process-wide,
//! thread-safe, and cheap to clone (uses Arc internally).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// One-shot message store keyed by session id.
///
/// Contract: a message set for a session is returned by exactly one
/// subsequent [`consume`](FlashStore::consume) call for that session, after
/// which it is gone. Setting again before consumption overwrites the unread
/// message. Sessions never observe each other's messages.
#[derive(Clone, Default)]
pub struct FlashStore {
    messages: Arc<RwLock<HashMap<String, String>>>,
}

impl FlashStore {
    /// Create a new empty FlashStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message for the session, overwriting any prior unread one.
    pub fn set(&self, session_id: &str, message: impl Into<String>) {
        if let Ok(mut messages) = self.messages.write() {
            messages.insert(session_id.to_string(), message.into());
        }
    }

    /// Return and clear the session's pending message, if any.
    pub fn consume(&self, session_id: &str) -> Option<String> {
        if let Ok(mut messages) = self.messages.write() {
            messages.remove(session_id)
        } else {
            None
        }
    }
}
