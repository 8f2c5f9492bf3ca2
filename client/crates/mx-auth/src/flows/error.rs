use crate::FieldErrors;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recoverable, user-displayable outcomes of an auth action.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Caught before any request was made
    #[error("Validation failed: {errors:?} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// The server refused the credentials; session unchanged
    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// The logout request failed; session left as it was
    #[error("Logout failed: {message} {location}")]
    LogoutFailed {
        message: String,
        location: ErrorLocation,
    },
}

impl FlowError {
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        FlowError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        FlowError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logout_failed(message: impl Into<String>) -> Self {
        FlowError::LogoutFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors, for validation failures only
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FlowError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Text to show next to the form field that failed first
    pub fn user_message(&self) -> &str {
        match self {
            FlowError::Validation { errors, .. } => errors.first().unwrap_or_default(),
            FlowError::Rejected { message, .. } | FlowError::LogoutFailed { message, .. } => {
                message
            }
        }
    }

    /// Every message, each validation failure prefixed with its field
    pub fn summary(&self) -> String {
        match self {
            FlowError::Validation { errors, .. } => errors.to_string(),
            _ => self.user_message().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
