//! # Error Types
//!
//! Structured error types for offboard_core. Every failure in this crate is
//! handled locally at the point of the user action, so the variants map
//! directly onto what a front end has to show: a guard view for missing
//! navigation state, a blocking prompt for validation problems, or a plain
//! message for the few I/O paths (settings file, certificate download).
//!
//! ## Example
//!
//! ```rust
//! use offboard_core::errors::{OffboardError, OffboardResult};
//!
//! fn require_title(title: &str) -> OffboardResult<()> {
//!     if title.trim().is_empty() {
//!         return Err(OffboardError::missing_field("title"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_title("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for offboard_core operations
pub type OffboardResult<T> = Result<T, OffboardError>;

/// Structured error type for offboarding operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum OffboardError {
    /// A wizard step was entered without the state carried from the previous step
    #[error("Missing navigation state: '{step}' requires data from the previous step")]
    MissingNavigationState { step: String },

    /// An input value is invalid (out of range, wrong format, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Employee id not present in the directory
    #[error("Employee not found: {id}")]
    EmployeeNotFound { id: String },

    /// An entry was not found in one of the case collections
    #[error("No entry '{id}' in {collection}")]
    NotFound { collection: String, id: String },

    /// An entry with the same key already exists
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: String, id: String },

    /// The requested action is not allowed in the current state
    #[error("Invalid transition: cannot {action} while in {from}")]
    InvalidTransition { from: String, action: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl OffboardError {
    /// Create a MissingNavigationState error
    pub fn missing_state(step: impl Into<String>) -> Self {
        OffboardError::MissingNavigationState { step: step.into() }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        OffboardError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        OffboardError::MissingField {
            field: field.into(),
        }
    }

    /// Create an EmployeeNotFound error
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        OffboardError::EmployeeNotFound { id: id.into() }
    }

    /// Create a NotFound error
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        OffboardError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate(collection: impl Into<String>, id: impl Into<String>) -> Self {
        OffboardError::DuplicateId {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create an InvalidTransition error
    pub fn invalid_transition(from: impl Into<String>, action: impl Into<String>) -> Self {
        OffboardError::InvalidTransition {
            from: from.into(),
            action: action.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        OffboardError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error should be surfaced to the user as a blocking prompt
    /// (guard state or validation failure) rather than as a system error.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            OffboardError::FileError { .. } | OffboardError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OffboardError::MissingNavigationState { .. } => "MISSING_NAVIGATION_STATE",
            OffboardError::InvalidInput { .. } => "INVALID_INPUT",
            OffboardError::MissingField { .. } => "MISSING_FIELD",
            OffboardError::EmployeeNotFound { .. } => "EMPLOYEE_NOT_FOUND",
            OffboardError::NotFound { .. } => "NOT_FOUND",
            OffboardError::DuplicateId { .. } => "DUPLICATE_ID",
            OffboardError::InvalidTransition { .. } => "INVALID_TRANSITION",
            OffboardError::FileError { .. } => "FILE_ERROR",
            OffboardError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for OffboardError {
    fn from(err: serde_json::Error) -> Self {
        OffboardError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = OffboardError::missing_state("review");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("MissingNavigationState"));
        let roundtrip: OffboardError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(OffboardError::missing_field("title").error_code(), "MISSING_FIELD");
        assert_eq!(OffboardError::employee_not_found("EMP999").error_code(), "EMPLOYEE_NOT_FOUND");
        assert_eq!(OffboardError::missing_state("exit-details").error_code(), "MISSING_NAVIGATION_STATE");
    }

    #[test]
    fn test_user_facing_classification() {
        assert!(OffboardError::missing_field("title").is_user_facing());
        assert!(OffboardError::missing_state("review").is_user_facing());
        assert!(!OffboardError::file_error("write", "/tmp/x", "denied").is_user_facing());
    }

    #[test]
    fn test_display_messages() {
        let err = OffboardError::not_found("comments", "CMT-9");
        assert_eq!(err.to_string(), "No entry 'CMT-9' in comments");
    }
}
