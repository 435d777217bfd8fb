//! In-memory list storage
//!
//! Stands in for the hosted document backend in tests, and models the
//! shared-backend deployment when one instance is shared between several
//! managers.

use async_trait::async_trait;
use list_core::ListSnapshot;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::storage::ListStorage;
use crate::subscription::{SnapshotSubscription, SubscriberSet};

#[derive(Default)]
pub struct MemoryListStorage {
    document: Mutex<Option<ListSnapshot>>,
    subscribers: SubscriberSet,
}

impl MemoryListStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing document, as if another client had written it
    pub fn with_snapshot(snapshot: ListSnapshot) -> Self {
        Self {
            document: Mutex::new(Some(snapshot)),
            subscribers: SubscriberSet::default(),
        }
    }
}

#[async_trait]
impl ListStorage for MemoryListStorage {
    async fn save(&self, snapshot: &ListSnapshot) -> Result<()> {
        *self.document.lock().await = Some(snapshot.clone());
        self.subscribers.publish(snapshot).await;
        Ok(())
    }

    async fn load(&self) -> Result<Option<ListSnapshot>> {
        Ok(self.document.lock().await.clone())
    }

    async fn subscribe(&self) -> SnapshotSubscription {
        self.subscribers.subscribe().await
    }
}
