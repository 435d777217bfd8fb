//! Core error types

use thiserror::Error;

use crate::reference::ItemRef;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    /// The reference did not resolve against the current list, either
    /// because the id is stale or the index is out of range.
    #[error("item not found: {0}")]
    ItemNotFound(ItemRef),
}

pub type Result<T> = std::result::Result<T, ListError>;
