use derive_more::{Deref, DerefMut};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StorageBox(Box<dyn KeyValueStorage>);

impl StorageBox {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self(Box::new(storage))
    }
}

/// Local key-value medium holding string values, the equivalent of a
/// browser's local storage.
pub trait KeyValueStorage {
    fn debug_message(&self);

    // Get the value stored under `key`, `None` if the key was never written
    fn get_item(&self, key: &str) -> eyre::Result<Option<String>>;

    // Overwrite the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> eyre::Result<()>;

    // Remove `key`, removing a missing key is not an error
    fn remove_item(&mut self, key: &str) -> eyre::Result<()>;
}
