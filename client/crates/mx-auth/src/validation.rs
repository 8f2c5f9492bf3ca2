//! Client-side form validation. Failures here never reach the server.

use crate::Credentials;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub(crate) static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Which password rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// Present is enough
    Login,
    /// Present and at least `MIN_PASSWORD_LENGTH` characters
    Registration,
}

/// Field-scoped validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// First message, email before password
    pub fn first(&self) -> Option<&str> {
        self.email.as_deref().or(self.password.as_deref())
    }
}

/// `email: <msg>; password: <msg>`, listing only the fields that failed
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [("email", &self.email), ("password", &self.password)];
        let mut separator = "";

        for (field, message) in fields {
            if let Some(message) = message {
                write!(f, "{separator}{field}: {message}")?;
                separator = "; ";
            }
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|regex| regex.is_match(email))
}

/// Checks every field and reports all failures at once.
pub fn validate_credentials(
    credentials: &Credentials,
    policy: PasswordPolicy,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if credentials.email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(&credentials.email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }

    if credentials.password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_string());
    } else if policy == PasswordPolicy::Registration
        && credentials.password.chars().count() < MIN_PASSWORD_LENGTH
    {
        errors.password = Some(PASSWORD_TOO_SHORT.to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
