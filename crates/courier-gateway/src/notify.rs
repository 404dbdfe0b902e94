//! Realtime update fan-out.
//!
//! Implements [`RealtimeNotifier`] over a `tokio::sync::broadcast` channel.
//! WebSocket (or any other transport) sessions subscribe and forward updates
//! to their connections; publishing with no subscribers is a success, not an
//! error.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use courier_types::errors::CourierError;
use courier_types::messages::RealtimeUpdate;
use courier_types::traits::RealtimeNotifier;

/// Broadcast-channel notifier.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<RealtimeUpdate>,
}

impl BroadcastNotifier {
    /// Create a notifier whose channel buffers up to `capacity` updates for
    /// slow subscribers before they start losing the oldest ones.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }
}

#[async_trait]
impl RealtimeNotifier for BroadcastNotifier {
    async fn publish(&self, update: RealtimeUpdate) -> Result<(), CourierError> {
        // send() errs only when there are no receivers; that is a quiet
        // system, not a failure.
        match self.tx.send(update) {
            Ok(receivers) => {
                debug!(receivers, "published realtime update");
            }
            Err(_) => {
                debug!("no realtime subscribers, update dropped");
            }
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<RealtimeUpdate> {
        self.tx.subscribe()
    }
}
