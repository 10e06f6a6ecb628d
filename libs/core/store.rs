use actstore_storage::{Activity, ActivityDraft, ActivityId, StorageBox};

use crate::{
    busy::BusyFlag,
    event_emitter::{EventEmitter, EventListener, StoreEvent},
    id_allocation::IdAllocation,
    snapshot::Snapshot,
    Outcome, StoreError,
};

/// In-memory list of activities mirrored to a single key of a local
/// key-value storage. The store is the only writer of that key.
///
/// Every operation is fail-soft: errors are logged and reported through the
/// returned [`Outcome`], never raised.
pub struct ActivityStore {
    storage: StorageBox,
    key: String,
    id_allocation: IdAllocation,
    activities: Vec<Activity>,
    loading: BusyFlag,
    last_error: Option<StoreError>,
    emitter: EventEmitter<StoreEvent>,
}

impl ActivityStore {
    /// Empty store over `storage`, call [`ActivityStore::load`] to pick up
    /// what was persisted.
    pub fn new(storage: StorageBox, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            id_allocation: IdAllocation::default(),
            activities: Vec::new(),
            loading: BusyFlag::default(),
            last_error: None,
            emitter: EventEmitter::new(),
        }
    }

    pub fn with_id_allocation(mut self, id_allocation: IdAllocation) -> Self {
        self.id_allocation = id_allocation;
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get_activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// Handle on the busy flag that can be polled from outside the store
    pub fn loading_flag(&self) -> BusyFlag {
        self.loading.clone()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Error reported by the most recent failed operation
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn subscribe(&self) -> EventListener<StoreEvent> {
        self.emitter.subscribe()
    }

    pub fn unsubscribe(&self, listener_id: u64) {
        self.emitter.unsubscribe(listener_id)
    }

    /// Replace the collection with the persisted snapshot. Missing or
    /// malformed data leaves the store empty.
    pub fn load(&mut self) -> Outcome {
        let _busy = self.loading.enter();

        let result = Snapshot::new(&mut *self.storage, &self.key).read();
        let outcome = match result {
            Ok(activities) => {
                tracing::debug!(key = %self.key, count = activities.len(), "activities loaded");
                self.activities = activities;
                Outcome::Applied(())
            }
            Err(e) => {
                self.activities = Vec::new();
                Outcome::Failed(e)
            }
        };

        self.emitter.notify(&StoreEvent::Loaded);
        self.settle("fetching activities", outcome)
    }

    /// Assign an id to `draft`, append it and persist the collection.
    ///
    /// When persisting fails the activity stays in memory; call
    /// [`ActivityStore::load`] to resynchronize.
    pub fn create(&mut self, draft: ActivityDraft) -> Outcome<ActivityId> {
        let _busy = self.loading.enter();

        let outcome = match self.append(draft) {
            Ok(id) => match self.persist() {
                Ok(()) => {
                    self.emitter.notify(&StoreEvent::Created(id));
                    Outcome::Applied(id)
                }
                Err(e) => Outcome::Failed(e),
            },
            Err(e) => Outcome::Failed(e),
        };

        self.settle("adding activity", outcome)
    }

    fn append(&mut self, draft: ActivityDraft) -> Result<ActivityId, StoreError> {
        let persisted_count = Snapshot::new(&mut *self.storage, &self.key).count()?;
        let id = self
            .id_allocation
            .next_id(persisted_count, &self.activities)?;

        if self.get_activity(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }

        self.activities.push(draft.into_activity(id));
        tracing::debug!(id, "activity added");
        Ok(id)
    }

    /// Set the status of the first activity with `id`. Unknown ids are a
    /// silent no-op and nothing is written.
    pub fn update_status(&mut self, id: ActivityId, status: impl Into<String>) -> Outcome {
        let _busy = self.loading.enter();

        let outcome = match self.activities.iter_mut().find(|a| a.id == id) {
            Some(activity) => {
                activity.status = Some(status.into());
                let persisted = self.persist();
                if persisted.is_ok() {
                    self.emitter.notify(&StoreEvent::StatusUpdated(id));
                }
                persisted.into()
            }
            None => {
                tracing::debug!(id, "no activity to update");
                Outcome::Unchanged
            }
        };

        self.settle("updating activity", outcome)
    }

    /// Drop every activity with `id` and persist the collection, even when
    /// nothing matched.
    pub fn delete(&mut self, id: ActivityId) -> Outcome {
        let _busy = self.loading.enter();

        let before = self.activities.len();
        self.activities.retain(|a| a.id != id);
        let removed = before != self.activities.len();

        let outcome = match self.persist() {
            Ok(()) if removed => {
                self.emitter.notify(&StoreEvent::Deleted(id));
                Outcome::Applied(())
            }
            Ok(()) => Outcome::Unchanged,
            Err(e) => Outcome::Failed(e),
        };

        self.settle("deleting activity", outcome)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        Snapshot::new(&mut *self.storage, &self.key).write(&self.activities)
    }

    fn settle<T>(&mut self, operation: &str, outcome: Outcome<T>) -> Outcome<T> {
        if let Outcome::Failed(e) = &outcome {
            tracing::error!("Error {operation}: {e}");
            self.last_error = Some(e.clone());
        }
        outcome
    }
}
