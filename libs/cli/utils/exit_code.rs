use core::fmt::Debug;
use std::process::Termination;

/// Standard Unix exit codes as defined in `<sysexits.h>`, only the ones the
/// cli reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The program executed successfully. (EX_OK)
    Success = 0,

    /// A generic or unspecified error occurred. (Not in sysexits.h, but common practice)
    Error = 1,

    /// The input data was incorrect in some way, e.g. a malformed snapshot. (EX_DATAERR)
    DataError = 65,

    /// An internal software error has been detected. (EX_SOFTWARE)
    Software = 70,

    /// An error occurred while doing I/O on the storage medium. (EX_IOERR)
    IoError = 74,

    /// A configuration error was detected. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Allows `ExitCode` to be returned from `main`.
impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
