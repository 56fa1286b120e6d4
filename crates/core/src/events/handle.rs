use chrono::Utc;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};

use super::{CollectionEvent, EventEnvelope};

/// Handle for emitting collection events
///
/// Cheaply cloneable. Emitting never blocks and never fails the caller, so it
/// can be used from plain synchronous code without a runtime.
#[derive(Debug, Clone)]
pub struct EventHandle {
    tx: mpsc::Sender<EventEnvelope>,
}

impl EventHandle {
    /// Create a new event handle from a channel sender
    pub fn new(tx: mpsc::Sender<EventEnvelope>) -> Self {
        Self { tx }
    }

    /// Try to emit an event without blocking
    ///
    /// Returns true if the event was queued. A full or closed channel is logged
    /// and the event is dropped.
    pub fn try_emit(&self, event: CollectionEvent) -> bool {
        let envelope = EventEnvelope {
            timestamp: Utc::now(),
            event,
        };
        match self.tx.try_send(envelope) {
            Ok(()) => true,
            Err(TrySendError::Full(envelope)) => {
                tracing::warn!(
                    event_type = envelope.event.event_type(),
                    "Event channel full, dropping collection event"
                );
                false
            }
            Err(TrySendError::Closed(envelope)) => {
                tracing::error!(
                    event_type = envelope.event.event_type(),
                    "Event channel closed, dropping collection event"
                );
                false
            }
        }
    }
}

/// Receiving side of the event channel
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::Receiver<EventEnvelope>,
}

impl EventReceiver {
    pub fn new(rx: mpsc::Receiver<EventEnvelope>) -> Self {
        Self { rx }
    }

    /// Take the next pending event, if any
    pub fn try_next(&mut self) -> Option<EventEnvelope> {
        match self.rx.try_recv() {
            Ok(envelope) => Some(envelope),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every pending event in emission order
    pub fn drain(&mut self) -> Vec<EventEnvelope> {
        let mut events = Vec::new();
        while let Some(envelope) = self.try_next() {
            events.push(envelope);
        }
        events
    }
}

/// Create a connected event handle and receiver
///
/// # Arguments
/// * `buffer_size` - Size of the channel buffer (events are dropped when full).
///   Zero is treated as one.
pub fn create_event_channel(buffer_size: usize) -> (EventHandle, EventReceiver) {
    let (tx, rx) = mpsc::channel(buffer_size.max(1));
    (EventHandle::new(tx), EventReceiver::new(rx))
}
