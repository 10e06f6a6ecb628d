use std::{
    io::Write,
    path::{Path, PathBuf},
};

use actstore_config::ProfileConfig;
use actstore_storage_core::{KeyValueStorage, StorageBox, StorageConfig};
use serde_derive::Deserialize;

use crate::utils::files;

const FILE_EXTENSION: &str = "json";

/// Stores every key in its own file under a directory. Writes go through a
/// temporary file that replaces the previous value in a single rename.
pub struct FileStorage {
    config: FileStorageConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileStorageConfig {
    /// Directory holding one file per key
    pub storage_location: PathBuf,
}

impl StorageConfig for FileStorageConfig {
    type Storage = FileStorage;

    fn from_profile(profile: &ProfileConfig) -> eyre::Result<Self> {
        Ok(Self {
            storage_location: profile.get_storage_location()?,
        })
    }

    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(FileStorage::new(self)))
    }
}

impl KeyValueStorage for FileStorage {
    fn debug_message(&self) {
        tracing::debug!(config = ?self.config, "using file storage");
    }

    fn get_item(&self, key: &str) -> eyre::Result<Option<String>> {
        let path = self.path_of(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("Failed to read {path:?}: {e}"))?;
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        let path = self.path_of(key)?;
        let dir = self.dir();
        files::create_dir_if_not_exists_deep(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)
            .map_err(|e| eyre::eyre!("Failed to replace {path:?}: {}", e.error))?;

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> eyre::Result<()> {
        let path = self.path_of(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(eyre::eyre!("Failed to remove {path:?}: {e}")),
        }
    }
}

impl FileStorage {
    pub fn new(config: FileStorageConfig) -> Self {
        FileStorage { config }
    }

    fn dir(&self) -> &Path {
        &self.config.storage_location
    }

    fn path_of(&self, key: &str) -> eyre::Result<PathBuf> {
        let dir = self.dir();
        if dir.exists() {
            files::check_path_is_directory(dir)?;
        }
        files::key_to_path(dir, key, FILE_EXTENSION)
    }
}
