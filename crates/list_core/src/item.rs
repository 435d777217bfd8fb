//! ShoppingItem - a single entry on the current list

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single entry on the current shopping list.
///
/// `text` is trimmed and non-empty when the item is created through
/// [`crate::ListSnapshot::add_item`]; items deserialized from a persisted
/// document are trusted as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Opaque identifier assigned at creation
    pub id: String,
    /// Display text
    pub text: String,
    /// Whether the item has been checked off
    pub completed: bool,
}

impl ShoppingItem {
    /// Create a new unchecked item with a freshly assigned id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate an opaque timestamp-derived id.
///
/// The millisecond timestamp alone collides for rapid adds, so a
/// process-local sequence number is appended.
pub fn next_id() -> String {
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}
