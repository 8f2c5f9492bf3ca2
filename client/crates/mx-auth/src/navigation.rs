use serde::Serialize;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const CALLBACK_PATH: &str = "/auth/callback";
pub const OAUTH_FAILED_REDIRECT: &str = "/login?error=oauth_failed";

/// Where to go next and whether the current history entry is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub to: String,
    pub replace: bool,
}

impl Navigation {
    /// Normal navigation, back returns to the current view
    pub fn push(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: false,
        }
    }

    /// Navigation that replaces the current history entry
    pub fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: true,
        }
    }

    pub fn home() -> Self {
        Self::push(HOME_PATH)
    }

    pub fn login() -> Self {
        Self::push(LOGIN_PATH)
    }
}
