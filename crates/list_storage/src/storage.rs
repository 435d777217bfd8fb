//! List storage trait and the file-backed implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use list_core::ListSnapshot;
use tokio::fs;
use tracing::debug;

use crate::error::Result;
use crate::subscription::{SnapshotSubscription, SubscriberSet};

/// The persistence port.
///
/// The backend holds a serialized copy of exactly one logical document;
/// the lifecycle manager keeps the authoritative mutable state in memory.
#[async_trait]
pub trait ListStorage: Send + Sync {
    /// Overwrite the stored document with the given snapshot and push it
    /// to all live subscribers.
    async fn save(&self, snapshot: &ListSnapshot) -> Result<()>;

    /// Load the stored document, or `Ok(None)` when none exists yet
    async fn load(&self) -> Result<Option<ListSnapshot>>;

    /// Subscribe to pushes of the stored document
    async fn subscribe(&self) -> SnapshotSubscription;
}

#[async_trait]
impl<S: ListStorage + ?Sized> ListStorage for std::sync::Arc<S> {
    async fn save(&self, snapshot: &ListSnapshot) -> Result<()> {
        (**self).save(snapshot).await
    }

    async fn load(&self) -> Result<Option<ListSnapshot>> {
        (**self).load().await
    }

    async fn subscribe(&self) -> SnapshotSubscription {
        (**self).subscribe().await
    }
}

/// File-based list storage: one JSON document per deployment
pub struct FileListStorage {
    path: PathBuf,
    subscribers: SubscriberSet,
}

impl FileListStorage {
    pub fn new<P: AsRef<Path>>(base_path: P, document_key: &str) -> Self {
        Self {
            path: base_path.as_ref().join(format!("{document_key}.json")),
            subscribers: SubscriberSet::default(),
        }
    }

    /// Path of the document this storage reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListStorage for FileListStorage {
    async fn save(&self, snapshot: &ListSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents).await?;
        debug!(path = %self.path.display(), "saved list document");

        self.subscribers.publish(snapshot).await;
        Ok(())
    }

    async fn load(&self) -> Result<Option<ListSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).await?;
        Ok(Some(ListSnapshot::from_json(&contents)?))
    }

    async fn subscribe(&self) -> SnapshotSubscription {
        self.subscribers.subscribe().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_core::ListConfig;
    use tempfile::tempdir;

    fn sample_snapshot() -> ListSnapshot {
        let mut snapshot = ListSnapshot::default();
        snapshot.add_item("Milk").unwrap();
        snapshot.add_item("Eggs").unwrap();
        snapshot
    }

    #[tokio::test]
    async fn test_file_storage_save_and_load() {
        let dir = tempdir().unwrap();
        let config = ListConfig::default();
        let storage = FileListStorage::new(dir.path(), &config.document_key);

        let snapshot = sample_snapshot();
        storage.save(&snapshot).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_file_storage_missing_document() {
        let dir = tempdir().unwrap();
        let storage = FileListStorage::new(dir.path(), "groceries");

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_storage_save_notifies_subscribers() {
        let dir = tempdir().unwrap();
        let storage = FileListStorage::new(dir.path(), "groceries");
        let mut sub = storage.subscribe().await;

        let snapshot = sample_snapshot();
        storage.save(&snapshot).await.unwrap();

        assert_eq!(sub.recv().await, Some(snapshot));
    }

    #[tokio::test]
    async fn test_file_storage_loads_single_list_document() {
        let dir = tempdir().unwrap();
        let storage = FileListStorage::new(dir.path(), "shared");

        fs::create_dir_all(dir.path()).await.unwrap();
        fs::write(
            storage.path(),
            r#"{"items":[{"id":"1","text":"Milk","completed":false}]}"#,
        )
        .await
        .unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.current_list.len(), 1);
        assert!(loaded.history.is_empty());
    }
}
