//! ItemRef - addressing items on the current list

use std::fmt;

/// Reference to an item on the current list.
///
/// `Id` is the standard form: ids are assigned at creation and stay valid
/// across reorders and remote updates. `Index` is a legacy adapter for
/// callers that still address items by position; an index goes stale as
/// soon as the list is reordered or overwritten by a remote snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemRef {
    /// Stable opaque id assigned at creation
    Id(String),
    /// Position in the current list (legacy)
    Index(usize),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

impl From<&str> for ItemRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<usize> for ItemRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}
