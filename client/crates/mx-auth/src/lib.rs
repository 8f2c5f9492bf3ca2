//! mx-auth
//!
//! Client-side authentication for the metrics platform: the HTTP client for
//! the auth API, the Session Store and its local cache, the Route Guard, and
//! the login/registration/OAuth-callback/logout flows.

pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod cookie_file;
pub(crate) mod credentials;
pub mod flows;
pub(crate) mod guard;
pub mod navigation;
pub(crate) mod route;
pub(crate) mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use cache::{CacheError, CacheResult, LoadResult, SessionCache};
pub use client::{AuthClient, ClientError, ClientResult};
pub use cookie_file::CookieFile;
pub use credentials::Credentials;
pub use flows::{FlowError, FlowResult, OAuthCallback};
pub use guard::{GuardDecision, RouteGuard};
pub use navigation::Navigation;
pub use route::Route;
pub use store::{SessionStore, VerifyTicket};
pub use validation::{FieldErrors, PasswordPolicy, validate_credentials};

pub use mx_core::{Identity, Session};
