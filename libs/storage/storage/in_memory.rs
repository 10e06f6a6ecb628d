use std::{cell::RefCell, collections::HashMap, rc::Rc};

use actstore_config::ProfileConfig;
use actstore_storage_core::{KeyValueStorage, StorageBox, StorageConfig};
use serde_derive::Deserialize;

/// This storage type is used for testing, data is not persisted to disk but
/// only present in memory. Clones share the same underlying map so a test can
/// keep a handle on the medium after handing it over to a store.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    config: InMemoryStorageConfig,
    inner: Rc<RefCell<InMemoryState>>,
}

#[derive(Default)]
struct InMemoryState {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct InMemoryStorageConfig {}

impl StorageConfig for InMemoryStorageConfig {
    type Storage = InMemoryStorage;

    fn from_profile(_profile: &ProfileConfig) -> eyre::Result<Self> {
        Ok(Self {})
    }

    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(InMemoryStorage::new(self)))
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn debug_message(&self) {
        tracing::debug!(config = ?self.config, "using in memory storage");
    }

    fn get_item(&self, key: &str) -> eyre::Result<Option<String>> {
        let state = self.inner.borrow();
        if state.fail_reads {
            return Err(eyre::eyre!("in memory storage: read of '{key}' refused"));
        }
        Ok(state.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        let mut state = self.inner.borrow_mut();
        if state.fail_writes {
            return Err(eyre::eyre!("in memory storage: quota exceeded writing '{key}'"));
        }
        state.items.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> eyre::Result<()> {
        let mut state = self.inner.borrow_mut();
        if state.fail_writes {
            return Err(eyre::eyre!("in memory storage: removal of '{key}' refused"));
        }
        state.items.remove(key);
        Ok(())
    }
}

impl InMemoryStorage {
    pub fn new(config: InMemoryStorageConfig) -> Self {
        InMemoryStorage {
            config,
            inner: Default::default(),
        }
    }

    /// Seeds `key` without going through the fault injection
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .items
            .insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Raw value under `key`, bypassing the fault injection
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }

    /// Number of successful `set_item` calls
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }
}
