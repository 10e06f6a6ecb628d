mod busy;
mod error;
mod event_emitter;
mod id_allocation;
mod load;
mod outcome;
mod snapshot;
mod store;

#[cfg(test)]
mod test_utilities;

pub use actstore_storage::{Activity, ActivityDraft, ActivityId};
pub use busy::BusyFlag;
pub use error::StoreError;
pub use event_emitter::{EventListener, StoreEvent};
pub use id_allocation::IdAllocation;
pub use load::{build_store, load, LoadedStore};
pub use outcome::Outcome;
pub use store::ActivityStore;
