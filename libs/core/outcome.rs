use crate::StoreError;

/// Result of a store operation. Operations never fail loudly, the outcome
/// lets a caller opt into stricter handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = ()> {
    /// The operation ran and its effect was persisted
    Applied(T),
    /// Nothing matched, nothing was written
    Unchanged,
    /// The error was logged and absorbed, in-memory state may diverge from storage
    Failed(StoreError),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// `Ok(None)` when nothing changed
    pub fn into_result(self) -> Result<Option<T>, StoreError> {
        match self {
            Outcome::Applied(value) => Ok(Some(value)),
            Outcome::Unchanged => Ok(None),
            Outcome::Failed(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, StoreError>> for Outcome<T> {
    fn from(result: Result<T, StoreError>) -> Self {
        match result {
            Ok(value) => Outcome::Applied(value),
            Err(e) => Outcome::Failed(e),
        }
    }
}
