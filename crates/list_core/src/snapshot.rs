//! ListSnapshot - the full list state and its mutations
//!
//! This is both the in-memory state owned by the lifecycle manager and the
//! shape of the persisted document. The storage backend only ever holds a
//! serialized copy, never the authoritative mutable state.

use serde::{Deserialize, Serialize};

use crate::archive::CompletedList;
use crate::config::ArchivePolicy;
use crate::error::{ListError, Result};
use crate::item::ShoppingItem;
use crate::reference::ItemRef;

/// The current list plus the archive of completed lists.
///
/// `history` is newest-first: completing a list prepends its entry.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    /// Items on the active list
    #[serde(default)]
    pub current_list: Vec<ShoppingItem>,

    /// Completed lists, newest first
    #[serde(default)]
    pub history: Vec<CompletedList>,
}

/// Wire-compatible forms of the persisted document.
///
/// Shared single-list deployments persisted only `{"items": [...]}`; the
/// full shape carries the archive as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDoc {
    ItemsOnly {
        items: Vec<ShoppingItem>,
    },
    Full {
        #[serde(rename = "currentList", default)]
        current_list: Vec<ShoppingItem>,
        #[serde(default)]
        history: Vec<CompletedList>,
    },
}

impl ListSnapshot {
    /// Parse a persisted document, accepting both the full shape and the
    /// single-list `{"items": [...]}` variant.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let doc: SnapshotDoc = serde_json::from_str(raw)?;
        Ok(match doc {
            SnapshotDoc::ItemsOnly { items } => Self {
                current_list: items,
                history: Vec::new(),
            },
            SnapshotDoc::Full {
                current_list,
                history,
            } => Self {
                current_list,
                history,
            },
        })
    }

    /// Resolve a reference against the current list
    fn resolve(&self, reference: &ItemRef) -> Option<usize> {
        match reference {
            ItemRef::Id(id) => self.current_list.iter().position(|i| &i.id == id),
            ItemRef::Index(index) => (*index < self.current_list.len()).then_some(*index),
        }
    }

    /// Append a new unchecked item.
    ///
    /// The input is trimmed first; an empty result is a silent no-op and
    /// returns `None` with no state change.
    pub fn add_item(&mut self, raw_text: &str) -> Option<&ShoppingItem> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        self.current_list.push(ShoppingItem::new(text));
        self.current_list.last()
    }

    /// Flip the completed flag on the referenced item
    pub fn toggle_item(&mut self, reference: &ItemRef) -> Result<&ShoppingItem> {
        let index = self
            .resolve(reference)
            .ok_or_else(|| ListError::ItemNotFound(reference.clone()))?;
        self.current_list[index].toggle();
        Ok(&self.current_list[index])
    }

    /// Remove the referenced item from the current list
    pub fn remove_item(&mut self, reference: &ItemRef) -> Result<ShoppingItem> {
        let index = self
            .resolve(reference)
            .ok_or_else(|| ListError::ItemNotFound(reference.clone()))?;
        Ok(self.current_list.remove(index))
    }

    /// Count of checked-off items on the current list
    pub fn completed_count(&self) -> usize {
        self.current_list.iter().filter(|i| i.completed).count()
    }

    /// True when the current list is non-empty and every item is checked off
    pub fn is_all_completed(&self) -> bool {
        !self.current_list.is_empty() && self.current_list.iter().all(|i| i.completed)
    }

    /// Whether completing the list is allowed under the given policy
    pub fn can_complete(&self, policy: ArchivePolicy) -> bool {
        match policy {
            ArchivePolicy::Manual => !self.current_list.is_empty(),
            ArchivePolicy::AutoOnAllComplete => self.is_all_completed(),
        }
    }

    /// Complete the current list: snapshot it by value into a new archive
    /// entry prepended to the history, and clear the current list.
    ///
    /// Returns `None` without touching any state when the policy predicate
    /// does not hold.
    pub fn complete(
        &mut self,
        name: Option<String>,
        policy: ArchivePolicy,
    ) -> Option<CompletedList> {
        if !self.can_complete(policy) {
            return None;
        }
        let items = std::mem::take(&mut self.current_list);
        let entry = CompletedList::new(name, items);
        self.history.insert(0, entry.clone());
        Some(entry)
    }

    /// Delete the archive entry with the given id.
    ///
    /// An unknown id is a silent no-op; returns whether an entry was removed.
    pub fn delete_completed(&mut self, id: &str) -> bool {
        let before = self.history.len();
        self.history.retain(|entry| entry.id != id);
        self.history.len() != before
    }
}
