use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ActivityId = u64;

/// A persisted activity. Only `id` and `status` carry meaning for the store,
/// every other field is kept verbatim in `fields`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// An activity that has not been assigned an id yet.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ActivityDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ActivityDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a caller-defined field. `id` and `status` are reserved and
    /// routed to their own slots.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "id" => {}
            "status" => self.status = value.as_str().map(|s| s.to_owned()),
            _ => {
                self.fields.insert(key, value);
            }
        }
        self
    }

    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            status: self.status,
            fields: self.fields,
        }
    }
}

impl Activity {
    pub fn get_field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
