use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity id: {value} {location}")]
    InvalidIdentityId {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at caller location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid id error at caller location
    #[track_caller]
    pub fn invalid_identity_id<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidIdentityId {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
