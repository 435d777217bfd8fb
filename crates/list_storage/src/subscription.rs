//! Snapshot subscriptions - push notification of document changes

use list_core::ListSnapshot;
use tokio::sync::{mpsc, Mutex};

/// A push stream of snapshots from a storage backend.
///
/// Dropping the subscription unsubscribes; the backend prunes the dead
/// sender on its next fan-out, so teardown cannot leak.
pub struct SnapshotSubscription {
    rx: mpsc::UnboundedReceiver<ListSnapshot>,
}

impl SnapshotSubscription {
    fn new(rx: mpsc::UnboundedReceiver<ListSnapshot>) -> Self {
        Self { rx }
    }

    /// Wait for the next pushed snapshot.
    ///
    /// Returns `None` once the backend has gone away.
    pub async fn recv(&mut self) -> Option<ListSnapshot> {
        self.rx.recv().await
    }

    /// Non-blocking poll for an already-delivered snapshot
    pub fn try_recv(&mut self) -> Option<ListSnapshot> {
        self.rx.try_recv().ok()
    }
}

/// The set of live subscribers of one storage backend
#[derive(Default)]
pub(crate) struct SubscriberSet {
    senders: Mutex<Vec<mpsc::UnboundedSender<ListSnapshot>>>,
}

impl SubscriberSet {
    /// Register a new subscriber
    pub async fn subscribe(&self) -> SnapshotSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().await.push(tx);
        SnapshotSubscription::new(rx)
    }

    /// Push a snapshot to every live subscriber, dropping dead ones
    pub async fn publish(&self, snapshot: &ListSnapshot) {
        self.senders
            .lock()
            .await
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.senders.lock().await.len()
    }
}
