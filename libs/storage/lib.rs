use std::str::FromStr;

use actstore_config::ProfileConfig;
use strum_macros::{Display, EnumString};

pub use actstore_storage_core::{
    Activity, ActivityDraft, ActivityId, KeyValueStorage, StorageBox, StorageConfig,
};

pub mod storage {
    pub mod file;
    pub mod in_memory;
}

pub(crate) mod utils {
    pub mod files;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BuiltinStorageType {
    File,
    InMemory,
}

impl BuiltinStorageType {
    pub fn try_from_profile(profile: &ProfileConfig) -> eyre::Result<Self> {
        let raw = profile.get_storage_type();
        Self::from_str(raw).map_err(|_| {
            eyre::eyre!("Invalid storage type '{raw}', please select one of `file`, `in-memory`")
        })
    }
}

/// Build the storage backend a profile asks for
pub fn load_storage(profile: &ProfileConfig) -> eyre::Result<StorageBox> {
    match BuiltinStorageType::try_from_profile(profile)? {
        BuiltinStorageType::File => load_storage_with::<storage::file::FileStorageConfig>(profile),
        BuiltinStorageType::InMemory => {
            load_storage_with::<storage::in_memory::InMemoryStorageConfig>(profile)
        }
    }
}

fn load_storage_with<SC: StorageConfig>(profile: &ProfileConfig) -> eyre::Result<StorageBox> {
    let storage = SC::from_profile(profile)?.try_into_storage()?;
    storage.debug_message();
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_parsing() -> eyre::Result<()> {
        let mut profile = ProfileConfig::default();
        assert_eq!(
            BuiltinStorageType::try_from_profile(&profile)?,
            BuiltinStorageType::File
        );

        profile.storage_type = Some("In-Memory".to_owned());
        assert_eq!(
            BuiltinStorageType::try_from_profile(&profile)?,
            BuiltinStorageType::InMemory
        );

        profile.storage_type = Some("git".to_owned());
        assert!(BuiltinStorageType::try_from_profile(&profile).is_err());
        Ok(())
    }

    #[test]
    fn test_load_in_memory_storage() -> eyre::Result<()> {
        let profile = ProfileConfig {
            storage_type: Some("in-memory".to_owned()),
            ..Default::default()
        };

        let mut storage = load_storage(&profile)?;
        storage.set_item("activities", "[]")?;
        assert_eq!(storage.get_item("activities")?.as_deref(), Some("[]"));
        Ok(())
    }
}
