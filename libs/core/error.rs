use actstore_storage::ActivityId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to read '{key}' from storage: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write '{key}' to storage: {reason}")]
    Write { key: String, reason: String },

    #[error("value stored under '{key}' is malformed: {reason}")]
    Deserialize { key: String, reason: String },

    #[error("failed to serialize activities: {0}")]
    Serialize(String),

    #[error("activity id {0} is already taken")]
    DuplicateId(ActivityId),

    #[error("no activity id left to assign")]
    IdsExhausted,
}
