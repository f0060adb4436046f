//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Timezone name not present in the IANA database
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Timestamp or date/time value that cannot be represented
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Unknown language code
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timezone_error_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn unknown_language_error_message() {
        let err = DomainError::UnknownLanguage("xx".to_string());
        assert_eq!(err.to_string(), "Unknown language: xx");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
