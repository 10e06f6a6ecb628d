use serde::de::DeserializeOwned;

use super::storage::{KeyValueStorage, StorageBox};

pub trait StorageConfig: DeserializeOwned + Default {
    type Storage: KeyValueStorage;

    /// Build the backend from the storage section of a profile
    fn from_profile(profile: &actstore_config::ProfileConfig) -> eyre::Result<Self>;

    fn try_into_storage(self) -> eyre::Result<StorageBox>;
}
