//! Lifecycle events and the event bus
//!
//! The manager broadcasts every state change here. The core assumes
//! nothing about the rendering mechanism on the other end; the receiver
//! is the registered listener of the observer contract.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use list_core::{CompletedList, ShoppingItem};
use tokio::sync::mpsc;

/// A state-change notification
#[derive(Debug, Clone)]
pub enum ListEvent {
    /// A new item was appended to the current list
    ItemAdded { item: ShoppingItem },

    /// An item's completed flag was flipped
    ItemToggled { item: ShoppingItem },

    /// An item was removed from the current list
    ItemRemoved { item: ShoppingItem },

    /// The current list was archived. This is also the signal for the
    /// view to switch to the history display.
    ListCompleted { entry: CompletedList },

    /// An archive entry was deleted
    CompletedListDeleted { id: String },

    /// In-memory state was overwritten wholesale by a backend push
    RemoteSnapshotApplied,
}

/// A bounded channel-based event bus
///
/// Uses `try_send` for non-blocking emission. If the channel is full,
/// events are dropped and counted in the `dropped` counter.
pub struct ListEventBus {
    tx: mpsc::Sender<ListEvent>,
    dropped: Arc<AtomicU64>,
}

impl ListEventBus {
    /// Create a new bus with the specified channel capacity
    ///
    /// Returns the bus (for emitting events) and the receiver (for the
    /// listener consuming them)
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ListEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            Self {
                tx,
                dropped: Arc::new(AtomicU64::new(0)),
            },
            rx,
        )
    }

    /// Emit an event
    ///
    /// This is non-blocking - if the channel is full, the event is dropped
    /// and the drop counter is incremented.
    pub fn emit(&self, event: ListEvent) {
        if self.tx.try_send(event).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get the number of dropped events since the bus was created
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Check if the channel is closed (listener dropped)
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Clone for ListEventBus {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            dropped: Arc::clone(&self.dropped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_bus_delivers_in_order() {
        let (bus, mut rx) = ListEventBus::new(10);

        bus.emit(ListEvent::ItemAdded {
            item: ShoppingItem::new("Milk"),
        });
        bus.emit(ListEvent::RemoteSnapshotApplied);

        let first = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("should receive event")
            .expect("event should exist");
        assert!(matches!(first, ListEvent::ItemAdded { .. }));

        let second = rx.recv().await.unwrap();
        assert!(matches!(second, ListEvent::RemoteSnapshotApplied));
    }

    #[tokio::test]
    async fn test_bus_drops_when_full() {
        let (bus, _rx) = ListEventBus::new(1);

        bus.emit(ListEvent::RemoteSnapshotApplied);
        bus.emit(ListEvent::RemoteSnapshotApplied);

        assert_eq!(bus.dropped_count(), 1);
    }

    #[tokio::test]
    async fn test_bus_clone_shares_dropped_counter() {
        let (bus1, _rx) = ListEventBus::new(1);
        let bus2 = bus1.clone();

        bus1.emit(ListEvent::RemoteSnapshotApplied);
        bus1.emit(ListEvent::RemoteSnapshotApplied);

        assert_eq!(bus2.dropped_count(), 1);
    }
}
