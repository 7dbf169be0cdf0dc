//! Error types for the payout bank account engine
//!
//! Only conditions that abort an operation live here. Format mismatches on
//! individual fields are ordinary data and are reported through
//! [`Verdict`](super::Verdict) instead.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: a country code with no registered rule
//! - **Registry Errors**: a country pattern that fails to compile
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed rows in batch input

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// No rule is registered for the country code
    ///
    /// This is a configuration error (a country offered to sellers that the
    /// engine does not implement). It is never defaulted to another country.
    #[error("Unsupported country: '{country}'")]
    UnsupportedCountry {
        /// The country code that was looked up
        country: String,
    },

    /// A grammar pattern failed to compile while building the registry
    #[error("Invalid pattern for {country} {field}: {message}")]
    InvalidPattern {
        /// Country whose descriptor carries the pattern
        country: String,
        /// Field the pattern belongs to
        field: String,
        /// Compiler message from the regex engine
        message: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable in batch mode: the malformed record is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The async runtime could not be started
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        EngineError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for EngineError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        EngineError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl EngineError {
    /// Create an UnsupportedCountry error
    pub fn unsupported_country(country: &str) -> Self {
        EngineError::UnsupportedCountry {
            country: country.to_string(),
        }
    }

    /// Create an InvalidPattern error
    pub fn invalid_pattern(country: &str, field: &str, message: &str) -> Self {
        EngineError::InvalidPattern {
            country: country.to_string(),
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        EngineError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a RuntimeError error
    pub fn runtime(message: &str) -> Self {
        EngineError::RuntimeError {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unsupported_country(
        EngineError::UnsupportedCountry { country: "XX".to_string() },
        "Unsupported country: 'XX'"
    )]
    #[case::invalid_pattern(
        EngineError::InvalidPattern {
            country: "AL".to_string(),
            field: "account_number".to_string(),
            message: "unclosed group".to_string(),
        },
        "Invalid pattern for AL account_number: unclosed group"
    )]
    #[case::file_not_found(
        EngineError::FileNotFound { path: "accounts.csv".to_string() },
        "File not found: accounts.csv"
    )]
    #[case::io_error(
        EngineError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        EngineError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        EngineError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::runtime_error(
        EngineError::RuntimeError { message: "no threads".to_string() },
        "Runtime error: no threads"
    )]
    fn test_error_display(#[case] error: EngineError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::unsupported_country(
        EngineError::unsupported_country("ZZ"),
        EngineError::UnsupportedCountry { country: "ZZ".to_string() }
    )]
    #[case::invalid_pattern(
        EngineError::invalid_pattern("DE", "bank_code", "bad"),
        EngineError::InvalidPattern {
            country: "DE".to_string(),
            field: "bank_code".to_string(),
            message: "bad".to_string(),
        }
    )]
    #[case::file_not_found(
        EngineError::file_not_found("missing.csv"),
        EngineError::FileNotFound { path: "missing.csv".to_string() }
    )]
    fn test_helper_functions(#[case] result: EngineError, #[case] expected: EngineError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: EngineError = io_error.into();
        assert!(matches!(error, EngineError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
