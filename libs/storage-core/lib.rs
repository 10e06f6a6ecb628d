mod activity;
mod storage;
mod storage_config;

pub use activity::{Activity, ActivityDraft, ActivityId};
pub use storage::{KeyValueStorage, StorageBox};
pub use storage_config::StorageConfig;
