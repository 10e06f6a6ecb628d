use actstore_config::{Config, ProfileConfig};

use crate::{ActivityStore, IdAllocation};

pub struct LoadedStore {
    pub store: ActivityStore,
    /// Ok - found | Err - not found with error reason
    pub found_config_file: Result<(), eyre::Error>,
}

/// Build a store from the config file at `config_path`. A missing or
/// unreadable config falls back on the default profile.
pub fn load(config_path: &str, profile_name: Option<&str>) -> eyre::Result<LoadedStore> {
    let mut found_config_file = Ok(());
    let config = match actstore_config::load(config_path) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("using default config: {e}");
            found_config_file = Err(e);
            Config::with_default_profile()
        }
    };

    let profile = config.get_profile(profile_name)?;
    let store = build_store(profile)?;

    Ok(LoadedStore {
        store,
        found_config_file,
    })
}

pub fn build_store(profile: &ProfileConfig) -> eyre::Result<ActivityStore> {
    let storage = actstore_storage::load_storage(profile)?;
    let id_allocation = IdAllocation::try_from_str(profile.get_id_allocation())?;

    Ok(ActivityStore::new(storage, profile.get_storage_key()).with_id_allocation(id_allocation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() -> eyre::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("config.toml");

        let loaded = load(config_path.to_str().unwrap(), None)?;

        assert!(loaded.found_config_file.is_err());
        assert_eq!(loaded.store.key(), "activities");
        Ok(())
    }

    #[test]
    fn test_profile_drives_store() -> eyre::Result<()> {
        let dir = tempdir()?;
        let data_dir = dir.path().join("data");
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!(
                r#"
                [profile.default]
                storage_location = "{}"
                storage_key = "todo"
                "#,
                data_dir.display()
            ),
        )?;

        let mut loaded = load(config_path.to_str().unwrap(), None)?;
        assert!(loaded.found_config_file.is_ok());

        let id = loaded
            .store
            .create(actstore_storage::ActivityDraft::new().field("title", "A"))
            .into_result()?;
        assert_eq!(id, Some(0));
        assert!(data_dir.join("todo.json").exists());
        Ok(())
    }

    #[test]
    fn test_unknown_profile_fails() -> eyre::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("config.toml");

        assert!(load(config_path.to_str().unwrap(), Some("work")).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_id_allocation_fails() {
        let profile = ProfileConfig {
            storage_type: Some("in-memory".to_owned()),
            id_allocation: Some("random".to_owned()),
            ..Default::default()
        };

        assert!(build_store(&profile).is_err());
    }
}
