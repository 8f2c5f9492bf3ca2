//! Identity - the authenticated user record issued by the server.

use crate::{CoreError, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// `id` is assigned by the server and never changes. `created_at` is
/// informational; OAuth callbacks do not carry it, so it is filled with the
/// time the callback was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Build a validated identity.
    pub fn new(
        id: i64,
        email: impl Into<String>,
        oauth_provider: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let identity = Self {
            id,
            email: email.into(),
            oauth_provider: oauth_provider.filter(|p| !p.is_empty()),
            created_at,
        };
        identity.validate()?;
        Ok(identity)
    }

    /// Parse the textual id carried by an OAuth callback.
    pub fn parse_id(value: &str) -> Result<i64> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::invalid_identity_id(value))
    }

    /// An identity always has an email; records without one are rejected
    /// wherever they come from (cache file or server response).
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::validation(format!(
                "identity {} has an empty email",
                self.id
            )));
        }
        Ok(())
    }

    /// Whether this account was created through an identity provider
    pub fn is_oauth(&self) -> bool {
        self.oauth_provider.is_some()
    }
}
