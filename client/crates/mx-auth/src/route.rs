use crate::navigation::{CALLBACK_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

use serde::Serialize;

/// Client-side route surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Protected landing view
    Home,
    Login { error: Option<String> },
    Register,
    AuthCallback { query: String },
    NotFound { path: String },
}

impl Route {
    /// Parse `"/path?query"`. Trailing slashes are ignored.
    pub fn parse(target: &str) -> Route {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { HOME_PATH } else { trimmed };

        match path {
            HOME_PATH => Route::Home,
            LOGIN_PATH => Route::Login {
                error: url::form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "error")
                    .map(|(_, value)| value.into_owned()),
            },
            REGISTER_PATH => Route::Register,
            CALLBACK_PATH => Route::AuthCallback {
                query: query.to_string(),
            },
            other => Route::NotFound {
                path: other.to_string(),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => HOME_PATH,
            Route::Login { .. } => LOGIN_PATH,
            Route::Register => REGISTER_PATH,
            Route::AuthCallback { .. } => CALLBACK_PATH,
            Route::NotFound { path } => path,
        }
    }

    /// Requires an authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Pointless for an authenticated session; bounce to home
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login { .. } | Route::Register)
    }
}
