//! Route Guard - gating check run on every navigation to a view.

use crate::{Navigation, Route};
use crate::navigation::LOGIN_PATH;

use log::debug;
use mx_core::Session;
use serde::Serialize;

/// What the navigation layer should do with a requested route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Render { route: Route },
    Redirect { navigation: Navigation },
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render { .. })
    }

    pub fn redirect_target(&self) -> Option<&Navigation> {
        match self {
            GuardDecision::Redirect { navigation } => Some(navigation),
            GuardDecision::Render { .. } => None,
        }
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decide against the current session. Stateless: callers re-run it on
    /// every render of a route.
    ///
    /// - protected route, not `Authenticated` (including `Unknown`) ->
    ///   redirect to login, replacing history
    /// - login/register while `Authenticated` -> redirect home
    /// - anything else renders
    pub fn check(session: &Session, route: Route) -> GuardDecision {
        if route.is_protected() && !session.is_authenticated() {
            debug!("Guard: {} requires login ({})", route.path(), session.as_str());
            return GuardDecision::Redirect {
                navigation: Navigation::replace(LOGIN_PATH),
            };
        }

        if route.is_guest_only() && session.is_authenticated() {
            debug!("Guard: already authenticated, leaving {}", route.path());
            return GuardDecision::Redirect {
                navigation: Navigation::home(),
            };
        }

        GuardDecision::Render { route }
    }
}
