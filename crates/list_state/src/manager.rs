//! ListManager - the list lifecycle manager
//!
//! Owns the current list and the archive, applies mutations synchronously
//! per event, and persists fire-and-forget after each change. The storage
//! backend only ever holds a serialized copy; a snapshot pushed by the
//! backend overwrites in-memory state wholesale (last-writer-wins).

use std::sync::Arc;

use list_core::{
    ArchivePolicy, CompletedList, ItemRef, ListConfig, ListSnapshot, Result, ShoppingItem,
};
use list_storage::ListStorage;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::events::{ListEvent, ListEventBus};

/// Result of a toggle, carrying the archive entry when the auto policy fired
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The item after the flip
    pub item: ShoppingItem,
    /// Present when the toggle completed the list under
    /// [`ArchivePolicy::AutoOnAllComplete`]
    pub archived: Option<CompletedList>,
}

pub struct ListManager<S: ListStorage> {
    storage: Arc<S>,
    state: Arc<RwLock<ListSnapshot>>,
    config: ListConfig,
    events: ListEventBus,
}

impl<S: ListStorage + 'static> ListManager<S> {
    /// Create a manager over the given storage and notification bus,
    /// loading the existing document if there is one.
    ///
    /// A load failure is logged and degrades to an empty list; there is no
    /// fatal error class.
    pub async fn new(storage: S, config: ListConfig, events: ListEventBus) -> Self {
        let storage = Arc::new(storage);

        let snapshot = match storage.load().await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => ListSnapshot::default(),
            Err(e) => {
                warn!("failed to load list document, starting empty: {e}");
                ListSnapshot::default()
            }
        };

        Self {
            storage,
            state: Arc::new(RwLock::new(snapshot)),
            config,
            events,
        }
    }

    /// The configured archive policy
    pub fn policy(&self) -> ArchivePolicy {
        self.config.policy
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> ListSnapshot {
        self.state.read().await.clone()
    }

    /// Append a new unchecked item.
    ///
    /// Empty or whitespace-only input is a silent no-op: no state change,
    /// nothing persisted, no event.
    pub async fn add_item(&self, raw_text: &str) -> Option<ShoppingItem> {
        let mut state = self.state.write().await;
        let item = state.add_item(raw_text)?.clone();
        self.persist(&state);
        drop(state);

        self.events.emit(ListEvent::ItemAdded { item: item.clone() });
        Some(item)
    }

    /// Flip the completed flag on the referenced item.
    ///
    /// Under the auto policy the archive predicate runs as a synchronous
    /// post-condition check of the flip, never as an independent watcher.
    pub async fn toggle_item(&self, reference: &ItemRef) -> Result<ToggleOutcome> {
        let mut state = self.state.write().await;
        let item = state.toggle_item(reference)?.clone();

        let archived = match self.config.policy {
            ArchivePolicy::AutoOnAllComplete => state.complete(None, self.config.policy),
            ArchivePolicy::Manual => None,
        };

        self.persist(&state);
        drop(state);

        self.events.emit(ListEvent::ItemToggled { item: item.clone() });
        if let Some(entry) = &archived {
            self.events.emit(ListEvent::ListCompleted {
                entry: entry.clone(),
            });
        }
        Ok(ToggleOutcome { item, archived })
    }

    /// Remove the referenced item from the current list
    pub async fn remove_item(&self, reference: &ItemRef) -> Result<ShoppingItem> {
        let mut state = self.state.write().await;
        let item = state.remove_item(reference)?;
        self.persist(&state);
        drop(state);

        self.events.emit(ListEvent::ItemRemoved { item: item.clone() });
        Ok(item)
    }

    /// Archive the current list under an optional name.
    ///
    /// A request that does not meet the policy predicate (empty list, or
    /// unfinished items under the auto policy) is a silent no-op.
    pub async fn complete_list(&self, name: Option<String>) -> Option<CompletedList> {
        let mut state = self.state.write().await;
        let entry = state.complete(name, self.config.policy)?;
        self.persist(&state);
        drop(state);

        self.events.emit(ListEvent::ListCompleted {
            entry: entry.clone(),
        });
        Some(entry)
    }

    /// Delete the archive entry with the given id.
    ///
    /// An unknown id is a silent no-op; returns whether an entry was removed.
    pub async fn delete_completed_list(&self, id: &str) -> bool {
        let mut state = self.state.write().await;
        if !state.delete_completed(id) {
            return false;
        }
        self.persist(&state);
        drop(state);

        self.events.emit(ListEvent::CompletedListDeleted { id: id.to_string() });
        true
    }

    /// Overwrite in-memory state with a snapshot pushed by the backend.
    ///
    /// Last-writer-wins, no merge. The snapshot is not saved back; that
    /// would echo between clients of a shared backend.
    pub async fn apply_remote_snapshot(&self, snapshot: ListSnapshot) {
        *self.state.write().await = snapshot;
        self.events.emit(ListEvent::RemoteSnapshotApplied);
    }

    /// Consume the storage subscription on a background task, overwriting
    /// state wholesale on every push. Ends when the subscription closes.
    pub async fn spawn_remote_sync(&self) -> JoinHandle<()> {
        let mut subscription = self.storage.subscribe().await;
        let state = Arc::clone(&self.state);
        let events = self.events.clone();

        tokio::spawn(async move {
            while let Some(snapshot) = subscription.recv().await {
                *state.write().await = snapshot;
                events.emit(ListEvent::RemoteSnapshotApplied);
            }
            debug!("remote sync subscription closed");
        })
    }

    /// Persist the given state fire-and-forget.
    ///
    /// Later mutations do not wait for the save; a failure is logged and
    /// never retried or surfaced, leaving the remote copy behind while
    /// in-memory state stays correct.
    fn persist(&self, snapshot: &ListSnapshot) {
        let storage = Arc::clone(&self.storage);
        let snapshot = snapshot.clone();
        tokio::spawn(async move {
            if let Err(e) = storage.save(&snapshot).await {
                warn!("failed to persist list document: {e}");
            }
        });
    }
}
