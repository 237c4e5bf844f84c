//! Error types for launchdeck.
//!
//! This module defines the crate-level error type. Errors that belong to a
//! single stage of a load (`FetchError`, `TransportError`) live next to that
//! stage and convert into [`Error`] where they cross the crate boundary.

use thiserror::Error;

use crate::aggregator::FetchError;
use crate::launch::FlightNumber;

/// The main error type for launchdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Load Errors ===
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Loading the launch list failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The requested launch is not in the loaded set.
    #[error("no launch with flight number {flight_number}")]
    LaunchNotFound {
        /// The identifier that was asked for.
        flight_number: FlightNumber,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for launchdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceKind;

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: Error = FetchError::Parse {
            kind: SourceKind::Upcoming,
            message: "expected value at line 1 column 1".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "failed to decode upcoming launches: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_fetch_error() {
        let err: Error = FetchError::Cancelled.into();
        assert!(matches!(err, Error::Fetch(FetchError::Cancelled)));
    }

    #[test]
    fn test_launch_not_found_display() {
        let err = Error::LaunchNotFound { flight_number: 404 };
        assert_eq!(err.to_string(), "no launch with flight number 404");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "invalid timeout".to_string(),
        };
        assert!(err.to_string().contains("invalid timeout"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("missing field".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("missing field"));
    }
}
