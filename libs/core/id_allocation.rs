use std::str::FromStr;

use actstore_storage::{Activity, ActivityId};
use strum_macros::{Display, EnumString};

use crate::StoreError;

/// How `create` picks the id of a new activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum IdAllocation {
    /// Number of activities currently in the persisted snapshot. Can hand out
    /// an id that is still in use once a record was deleted.
    PersistedCount,
    /// Persisted count, bumped past the highest id held in memory. Ids are
    /// not reserved across deletes: removing the highest activity frees its
    /// id for the next `create`.
    #[default]
    Monotonic,
}

impl IdAllocation {
    pub fn try_from_str(s: &str) -> eyre::Result<Self> {
        Self::from_str(s).map_err(|_| {
            eyre::eyre!("Invalid id allocation '{s}', please select one of `monotonic`, `persisted-count`")
        })
    }

    pub fn next_id(
        self,
        persisted_count: usize,
        activities: &[Activity],
    ) -> Result<ActivityId, StoreError> {
        let persisted_count = persisted_count as ActivityId;
        match self {
            IdAllocation::PersistedCount => Ok(persisted_count),
            IdAllocation::Monotonic => match activities.iter().map(|a| a.id).max() {
                None => Ok(persisted_count),
                Some(highest) => highest
                    .checked_add(1)
                    .map(|next| next.max(persisted_count))
                    .ok_or(StoreError::IdsExhausted),
            },
        }
    }
}
