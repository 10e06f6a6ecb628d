use actstore_storage::{Activity, KeyValueStorage};
use serde_json::Value;

use crate::StoreError;

/// The persisted copy of the collection: a JSON array under one key.
pub(crate) struct Snapshot<'a> {
    storage: &'a mut dyn KeyValueStorage,
    key: &'a str,
}

impl<'a> Snapshot<'a> {
    pub fn new(storage: &'a mut dyn KeyValueStorage, key: &'a str) -> Self {
        Self { storage, key }
    }

    fn read_raw(&self) -> Result<Option<Value>, StoreError> {
        let raw = self
            .storage
            .get_item(self.key)
            .map_err(|e| StoreError::Read {
                key: self.key.to_owned(),
                reason: format!("{e:#}"),
            })?;

        raw.map(|raw| serde_json::from_str::<Value>(&raw))
            .transpose()
            .map_err(|e| self.malformed(e))
    }

    /// Read the whole collection. A missing key or a `null` value is an
    /// empty collection, anything else that isn't an array of activities is
    /// an error.
    pub fn read(&self) -> Result<Vec<Activity>, StoreError> {
        match self.read_raw()? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value @ Value::Array(_)) => {
                serde_json::from_value(value).map_err(|e| self.malformed(e))
            }
            Some(other) => Err(StoreError::Deserialize {
                key: self.key.to_owned(),
                reason: format!("expected an array, found {}", json_kind(&other)),
            }),
        }
    }

    /// Length of the persisted array. Values that parse but aren't an array
    /// count as empty.
    pub fn count(&self) -> Result<usize, StoreError> {
        match self.read_raw()? {
            Some(Value::Array(items)) => Ok(items.len()),
            Some(other) => {
                if !other.is_null() {
                    tracing::warn!(
                        key = self.key,
                        "persisted value is {}, counting it as empty",
                        json_kind(&other)
                    );
                }
                Ok(0)
            }
            None => Ok(0),
        }
    }

    /// Overwrite the snapshot with the full collection
    pub fn write(&mut self, activities: &[Activity]) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(activities).map_err(|e| StoreError::Serialize(e.to_string()))?;

        self.storage
            .set_item(self.key, &serialized)
            .map_err(|e| StoreError::Write {
                key: self.key.to_owned(),
                reason: format!("{e:#}"),
            })
    }

    fn malformed(&self, e: serde_json::Error) -> StoreError {
        StoreError::Deserialize {
            key: self.key.to_owned(),
            reason: e.to_string(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actstore_storage::storage::in_memory::InMemoryStorage;

    const KEY: &str = "activities";

    #[test]
    fn test_read_missing_and_null() -> eyre::Result<()> {
        let mut storage = InMemoryStorage::default();
        assert!(Snapshot::new(&mut storage, KEY).read()?.is_empty());

        let mut storage = InMemoryStorage::default().with_item(KEY, "null");
        assert!(Snapshot::new(&mut storage, KEY).read()?.is_empty());
        assert_eq!(Snapshot::new(&mut storage, KEY).count()?, 0);
        Ok(())
    }

    #[test]
    fn test_read_rejects_non_array() {
        let mut storage = InMemoryStorage::default().with_item(KEY, r#"{"id": 0}"#);
        let snapshot = Snapshot::new(&mut storage, KEY);

        assert!(matches!(
            snapshot.read(),
            Err(StoreError::Deserialize { .. })
        ));
        assert_eq!(snapshot.count(), Ok(0));
    }

    #[test]
    fn test_invalid_json_fails_count() {
        let mut storage = InMemoryStorage::default().with_item(KEY, "[{");
        let snapshot = Snapshot::new(&mut storage, KEY);

        assert!(matches!(
            snapshot.count(),
            Err(StoreError::Deserialize { .. })
        ));
    }

    #[test]
    fn test_count_ignores_record_shape() {
        let mut storage = InMemoryStorage::default().with_item(KEY, r#"[1, "two", {}]"#);
        assert_eq!(Snapshot::new(&mut storage, KEY).count(), Ok(3));
    }

    #[test]
    fn test_write_failure_maps_to_write_error() {
        let mut storage = InMemoryStorage::default();
        storage.set_fail_writes(true);

        let result = Snapshot::new(&mut storage, KEY).write(&[]);
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }
}
