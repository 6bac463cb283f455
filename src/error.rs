//! Error types for the receipt processor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while accepting, storing and
//! scoring receipts.

use thiserror::Error;

use crate::validation::ValidationIssue;

/// The main error type for the receipt processor.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use receipt_processor::error::EngineError;
///
/// let error = EngineError::ReceiptNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Receipt not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The submitted receipt failed one or more validation checks.
    #[error("Receipt failed validation with {} problem(s)", .issues.len())]
    InvalidReceipt {
        /// Every problem found, in check order.
        issues: Vec<ValidationIssue>,
    },

    /// No receipt is stored under the requested identifier.
    #[error("Receipt not found: {id}")]
    ReceiptNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Receipt JSON could not be decoded.
    #[error("Malformed receipt JSON: {message}")]
    MalformedReceipt {
        /// The decoder's description of the problem.
        message: String,
    },

    /// The receipt store could not be accessed.
    #[error("Receipt store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured host and port do not form a socket address.
    #[error("Invalid server address '{host}:{port}'")]
    InvalidServerAddress {
        /// The configured host.
        host: String,
        /// The configured port.
        port: u16,
    },

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// An I/O operation failed (binding the listener, reading input files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_receipt_displays_issue_count() {
        let error = EngineError::InvalidReceipt {
            issues: vec![ValidationIssue::EmptyRetailer, ValidationIssue::InvalidPrice],
        };
        assert_eq!(
            error.to_string(),
            "Receipt failed validation with 2 problem(s)"
        );
    }

    #[test]
    fn test_receipt_not_found_displays_id() {
        let error = EngineError::ReceiptNotFound {
            id: "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Receipt not found: 7fb1377b-b223-49d9-a31a-5a02701dd310"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_server_address_displays_host_and_port() {
        let error = EngineError::InvalidServerAddress {
            host: "not a host".to_string(),
            port: 8080,
        };
        assert_eq!(error.to_string(), "Invalid server address 'not a host:8080'");
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> EngineResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"))?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, EngineError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: port taken");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
