use crate::{Navigation, SessionStore};
use crate::navigation::OAUTH_FAILED_REDIRECT;

use chrono::{DateTime, Utc};
use log::{info, warn};
use mx_core::Identity;

/// Handles one navigation to the OAuth callback URL.
///
/// The processed flag makes `process` a one-shot transition: a re-render
/// calling it again gets `None` and the session is not touched twice.
#[derive(Debug, Default)]
pub struct OAuthCallback {
    processed: bool,
}

impl OAuthCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Process the callback query (`id`, `email`, optional `oauth_provider`).
    pub fn process(&mut self, store: &mut SessionStore, query: &str) -> Option<Navigation> {
        self.process_at(store, query, Utc::now())
    }

    /// Same as `process`, with an explicit `created_at` for the new identity.
    pub fn process_at(
        &mut self,
        store: &mut SessionStore,
        query: &str,
        now: DateTime<Utc>,
    ) -> Option<Navigation> {
        if self.processed {
            return None;
        }
        self.processed = true;

        match identity_from_query(query, now) {
            Some(identity) => {
                info!(
                    "OAuth callback accepted for {} via {}",
                    identity.email,
                    identity.oauth_provider.as_deref().unwrap_or("unknown provider")
                );
                store.set_identity(Some(identity));
                Some(Navigation::home())
            }
            None => {
                warn!("OAuth callback missing id or email");
                Some(Navigation::push(OAUTH_FAILED_REDIRECT))
            }
        }
    }
}

fn identity_from_query(query: &str, now: DateTime<Utc>) -> Option<Identity> {
    let query = query.trim_start_matches('?');

    let mut id = None;
    let mut email = None;
    let mut provider = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "id" => id = Some(value.into_owned()),
            "email" => email = Some(value.into_owned()),
            "oauth_provider" => provider = Some(value.into_owned()),
            _ => {}
        }
    }

    let id = Identity::parse_id(id.as_deref().filter(|v| !v.is_empty())?).ok()?;
    let email = email.filter(|v| !v.is_empty())?;

    Identity::new(id, email, provider, now).ok()
}
