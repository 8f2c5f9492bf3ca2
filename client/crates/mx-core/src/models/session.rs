//! Session - the client's belief about who is logged in.

use crate::Identity;

use serde::Serialize;

/// Three-state session.
///
/// `Unknown` means nothing has been checked yet; `Anonymous` means the client
/// checked and nobody is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Session::Unknown)
    }

    /// The logged-in identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Authenticated(identity) => Some(identity),
            Session::Unknown | Session::Anonymous => None,
        }
    }

    /// Lowercase label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Unknown => "unknown",
            Session::Anonymous => "anonymous",
            Session::Authenticated(_) => "authenticated",
        }
    }
}

impl From<Option<Identity>> for Session {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Session::Authenticated(identity),
            None => Session::Anonymous,
        }
    }
}
