//! Process exit codes of the `ercli` binary.
//!
//! The standard conditions reuse the BSD sysexits values from the `exitcode` crate;
//! failures specific to talking to Emergency Reporting get codes from 100 up.

/// Exit codes for `ercli`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErExitCode {
    Success,
    /// Command line usage error (64)
    UsageError,
    /// Input data was incorrect (65)
    DataError,
    /// Incident, user or other record not found (67)
    NotFound,
    /// Unexpected application error (70)
    SoftwareError,
    /// Configuration file missing or invalid (78)
    ConfigError,
    /// No token could be obtained (100)
    AuthError,
    /// Connection or transport failure (101)
    NetworkError,
    /// The API rejected the request (102)
    ApiError,
}

impl ErExitCode {
    pub fn code(&self) -> i32 {
        match self {
            ErExitCode::Success => exitcode::OK,
            ErExitCode::UsageError => exitcode::USAGE,
            ErExitCode::DataError => exitcode::DATAERR,
            ErExitCode::NotFound => exitcode::NOUSER,
            ErExitCode::SoftwareError => exitcode::SOFTWARE,
            ErExitCode::ConfigError => exitcode::CONFIG,
            ErExitCode::AuthError => 100,
            ErExitCode::NetworkError => 101,
            ErExitCode::ApiError => 102,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErExitCode::Success => "Success",
            ErExitCode::UsageError => "Command line usage error",
            ErExitCode::DataError => "Data format error",
            ErExitCode::NotFound => "Resource not found",
            ErExitCode::SoftwareError => "Internal software error",
            ErExitCode::ConfigError => "Configuration error",
            ErExitCode::AuthError => "Authentication error",
            ErExitCode::NetworkError => "Network communication error",
            ErExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<ErExitCode> for i32 {
    fn from(code: ErExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sysexits() {
        assert_eq!(ErExitCode::Success.code(), 0);
        assert_eq!(ErExitCode::UsageError.code(), 64);
        assert_eq!(ErExitCode::DataError.code(), 65);
        assert_eq!(ErExitCode::NotFound.code(), 67);
        assert_eq!(ErExitCode::SoftwareError.code(), 70);
        assert_eq!(ErExitCode::ConfigError.code(), 78);
        assert_eq!(i32::from(ErExitCode::ApiError), 102);
    }
}
