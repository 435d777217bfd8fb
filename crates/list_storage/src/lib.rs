//! list_storage - Persistence port and storage backends
//!
//! The lifecycle manager depends only on the [`ListStorage`] trait; the
//! backends here are a file-backed document store and an in-memory fake.
//! Both push the document to live subscribers after every save, the way a
//! hosted real-time backend notifies its clients.

pub mod error;
pub mod memory;
pub mod storage;
pub mod subscription;

// Re-export commonly used types
pub use error::{Result, StorageError};
pub use memory::MemoryListStorage;
pub use storage::{FileListStorage, ListStorage};
pub use subscription::SnapshotSubscription;
