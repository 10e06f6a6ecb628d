use crossbeam_channel::{Receiver, SendError, Sender, TryRecvError};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use actstore_storage::ActivityId;

/// Change notifications sent to store listeners
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection was replaced from storage (possibly with an empty one)
    Loaded,
    Created(ActivityId),
    StatusUpdated(ActivityId),
    Deleted(ActivityId),
}

#[derive(Clone)]
pub struct EventEmitter<T: Clone> {
    listener_ids_counter: Arc<AtomicU64>,
    listeners: DashMap<u64, EventListener<T>>,
}

impl<T: Clone> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            listener_ids_counter: Arc::new(AtomicU64::default()),
            listeners: DashMap::new(),
        }
    }

    pub fn notify(&self, data: &T) {
        // A listener whose receiving end is gone is dropped on the spot
        self.listeners.retain(|id, listener| match listener.send(data) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("listener {id} disconnected, unsubscribing");
                false
            }
        });
    }

    fn generate_listener_id(&self) -> u64 {
        self.listener_ids_counter.fetch_add(1, Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> EventListener<T> {
        let listener_id = self.generate_listener_id();
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.listeners.insert(
            listener_id,
            EventListener {
                id: listener_id,
                sender: Some(sender),
                receiver: None,
            },
        );
        EventListener {
            id: listener_id,
            sender: None,
            receiver: Some(receiver),
        }
    }

    pub fn unsubscribe(&self, listener_id: u64) {
        self.listeners.remove(&listener_id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// One end of a subscription. The emitter keeps the sending half, the
/// subscriber gets the receiving half.
pub struct EventListener<T: Clone> {
    pub id: u64,
    sender: Option<Sender<T>>,
    receiver: Option<Receiver<T>>,
}

impl<T: Clone> Clone for EventListener<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
        }
    }
}

impl<T: Clone> EventListener<T> {
    fn send(&self, data: &T) -> Result<(), SendError<T>> {
        match &self.sender {
            Some(sender) => sender.send(data.clone()),
            None => Ok(()),
        }
    }

    /// Next pending event, `None` when nothing was emitted since the last call
    pub fn try_listen(&self) -> eyre::Result<Option<T>> {
        let receiver = self
            .receiver
            .as_ref()
            .ok_or_else(|| eyre::eyre!("listener {} has no receiving end", self.id))?;

        match receiver.try_recv() {
            Ok(data) => Ok(Some(data)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(e @ TryRecvError::Disconnected) => Err(eyre::eyre!(e)),
        }
    }

    /// Every event emitted since the last call
    pub fn drain(&self) -> Vec<T> {
        self.receiver
            .as_ref()
            .map(|r| r.try_iter().collect())
            .unwrap_or_default()
    }
}
