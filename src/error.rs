//! Error types for the herald CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Placeholder resolution failures are not represented here: they are
//! recovered locally by the materializer and never abort a run.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for herald operations.
#[derive(Error, Debug)]
pub enum HeraldError {
    /// User provided invalid arguments, options, or template files.
    #[error("{0}")]
    UserError(String),

    /// A commit filter pattern failed to compile.
    #[error("invalid pattern in {option}: '{pattern}' - {reason}")]
    PatternError {
        option: String,
        pattern: String,
        reason: String,
    },

    /// The push event could not be loaded.
    #[error("Event input failed: {0}")]
    EventError(String),

    /// The webhook delivery failed.
    #[error("Delivery failed: {0}")]
    DeliveryError(String),
}

impl HeraldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeraldError::UserError(_) => exit_codes::USER_ERROR,
            HeraldError::PatternError { .. } => exit_codes::USER_ERROR,
            HeraldError::EventError(_) => exit_codes::EVENT_FAILURE,
            HeraldError::DeliveryError(_) => exit_codes::DELIVERY_FAILURE,
        }
    }
}

/// Result type alias for herald operations.
pub type Result<T> = std::result::Result<T, HeraldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = HeraldError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn pattern_error_is_a_configuration_error() {
        let err = HeraldError::PatternError {
            option: "include-commits".to_string(),
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            err.to_string(),
            "invalid pattern in include-commits: '(' - unclosed group"
        );
    }

    #[test]
    fn event_error_has_correct_exit_code() {
        let err = HeraldError::EventError("missing file".to_string());
        assert_eq!(err.exit_code(), exit_codes::EVENT_FAILURE);
        assert_eq!(err.to_string(), "Event input failed: missing file");
    }

    #[test]
    fn delivery_error_has_correct_exit_code() {
        let err = HeraldError::DeliveryError("HTTP 500".to_string());
        assert_eq!(err.exit_code(), exit_codes::DELIVERY_FAILURE);
        assert_eq!(err.to_string(), "Delivery failed: HTTP 500");
    }
}
