//! list_state - The list lifecycle manager
//!
//! [`ListManager`] owns the in-memory list state, applies mutations,
//! broadcasts lifecycle events on a bounded bus, and persists each change
//! fire-and-forget through an injected storage port.

pub mod events;
pub mod manager;

// Re-export commonly used types
pub use events::{ListEvent, ListEventBus};
pub use manager::{ListManager, ToggleOutcome};
