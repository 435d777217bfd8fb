//! list_core - Core types for the shopping-list lifecycle
//!
//! This crate provides the foundational types used across the list crates:
//! - `item` - ShoppingItem, the entries of the current list
//! - `archive` - CompletedList, an immutable archived list
//! - `snapshot` - ListSnapshot, the full persisted state and its mutations
//! - `reference` - ItemRef for addressing items by id (or legacy index)
//! - `config` - ArchivePolicy and ListConfig

pub mod archive;
pub mod config;
pub mod error;
pub mod item;
pub mod reference;
pub mod snapshot;

// Re-export commonly used types
pub use archive::CompletedList;
pub use config::{ArchivePolicy, ListConfig};
pub use error::{ListError, Result};
pub use item::ShoppingItem;
pub use reference::ItemRef;
pub use snapshot::ListSnapshot;
