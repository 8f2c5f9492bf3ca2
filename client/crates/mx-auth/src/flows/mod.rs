//! Auth action flows: each ends in a session update or a displayable error.

pub(crate) mod error;
pub(crate) mod oauth_callback;

pub use error::{FlowError, Result as FlowResult};
pub use oauth_callback::OAuthCallback;

use crate::client::client::{LOGIN_FAILED, LOGOUT_FAILED, REGISTRATION_FAILED};
use crate::{AuthClient, Credentials, Navigation, PasswordPolicy, SessionStore, validate_credentials};

use log::{info, warn};

/// Validate, submit `{email, password}`, and on acceptance store the identity.
pub async fn login(
    store: &mut SessionStore,
    client: &AuthClient,
    credentials: &Credentials,
) -> FlowResult<Navigation> {
    validate_credentials(credentials, PasswordPolicy::Login).map_err(FlowError::validation)?;

    match client.login(&credentials.email, &credentials.password).await {
        Ok(identity) => {
            info!("Logged in as {}", identity.email);
            store.set_identity(Some(identity));
            Ok(Navigation::home())
        }
        Err(e) => {
            warn!("Login rejected: {e}");
            Err(FlowError::rejected(e.user_message(LOGIN_FAILED)))
        }
    }
}

/// Like `login`, with the registration password rule.
pub async fn register(
    store: &mut SessionStore,
    client: &AuthClient,
    credentials: &Credentials,
) -> FlowResult<Navigation> {
    validate_credentials(credentials, PasswordPolicy::Registration)
        .map_err(FlowError::validation)?;

    match client
        .register(&credentials.email, &credentials.password)
        .await
    {
        Ok(identity) => {
            info!("Registered {}", identity.email);
            store.set_identity(Some(identity));
            Ok(Navigation::home())
        }
        Err(e) => {
            warn!("Registration rejected: {e}");
            Err(FlowError::rejected(e.user_message(REGISTRATION_FAILED)))
        }
    }
}

/// End the session. A failed request is reported and the local session is
/// kept so the user can retry.
pub async fn logout(store: &mut SessionStore, client: &AuthClient) -> FlowResult<Navigation> {
    match client.logout().await {
        Ok(()) => {
            store.set_identity(None);
            Ok(Navigation::login())
        }
        Err(e) => {
            warn!("Logout request failed: {e}");
            Err(FlowError::logout_failed(LOGOUT_FAILED))
        }
    }
}
