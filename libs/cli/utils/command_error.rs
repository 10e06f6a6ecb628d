use actstore_core::{Outcome, StoreError};
use colored::Colorize;

use crate::utils::exit_code::ExitCode;

pub enum Error {
    ExitWithError(ExitCode, eyre::Report),
}

impl Error {
    pub fn code(&self) -> ExitCode {
        match self {
            Error::ExitWithError(exit_code, _) => *exit_code,
        }
    }

    pub fn config(report: eyre::Report) -> Self {
        Self::ExitWithError(ExitCode::ConfigError, report)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<eyre::Report>,
{
    #[track_caller]
    fn from(error: E) -> Self {
        let r: eyre::Report = error.into();
        Self::ExitWithError(ExitCode::Error, r)
    }
}

fn store_exit_code(error: &StoreError) -> ExitCode {
    match error {
        StoreError::Read { .. } | StoreError::Write { .. } => ExitCode::IoError,
        StoreError::Deserialize { .. } | StoreError::Serialize(_) | StoreError::IdsExhausted => {
            ExitCode::DataError
        }
        StoreError::DuplicateId(_) => ExitCode::Software,
    }
}

/// Turn a store outcome into a command result. Failures only abort the
/// command in strict mode, otherwise they are reported and skipped.
pub fn check<T>(outcome: Outcome<T>, strict: bool) -> Result<Option<T>> {
    match outcome.into_result() {
        Ok(value) => Ok(value),
        Err(e) if strict => Err(Error::ExitWithError(store_exit_code(&e), e.into())),
        Err(e) => {
            eprintln!("{} {}", "warning:".yellow().bold(), e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_failure() -> Outcome<u64> {
        Outcome::Failed(StoreError::Write {
            key: "activities".to_owned(),
            reason: "disk full".to_owned(),
        })
    }

    #[test]
    fn test_check_strict_maps_exit_code() {
        match check(write_failure(), true) {
            Err(e) => assert_eq!(e.code(), ExitCode::IoError),
            Ok(_) => panic!("strict check should fail"),
        }

        let malformed = Outcome::<()>::Failed(StoreError::Deserialize {
            key: "activities".to_owned(),
            reason: "expected an array".to_owned(),
        });
        match check(malformed, true) {
            Err(e) => assert_eq!(e.code(), ExitCode::DataError),
            Ok(_) => panic!("strict check should fail"),
        }
    }

    #[test]
    fn test_check_lenient_skips_failures() {
        assert!(matches!(check(write_failure(), false), Ok(None)));
    }

    #[test]
    fn test_check_passes_results_through() {
        assert!(matches!(check(Outcome::Applied(3u64), true), Ok(Some(3))));
        assert!(matches!(check(Outcome::<u64>::Unchanged, true), Ok(None)));
    }
}
