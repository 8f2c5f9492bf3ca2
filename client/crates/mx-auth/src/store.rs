//! Session Store - the single owner of "who is logged in".
//!
//! The in-memory `Session` is authoritative for the running process. The
//! `SessionCache` mirrors it so the next start can show the last identity
//! before the server has confirmed it. All writes to either go through here.

use crate::{AuthClient, ClientResult, SessionCache};

use log::{debug, info, warn};
use mx_core::{Identity, Session};

/// Proof that a verification was started against a given store state.
///
/// Handed back to `complete_verify`; a result whose ticket predates the
/// latest `set_identity` is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct VerifyTicket {
    generation: u64,
}

pub struct SessionStore {
    session: Session,
    cache: SessionCache,
    generation: u64,
}

impl SessionStore {
    /// New store in the `Unknown` state. Call `hydrate` before use.
    pub fn new(cache: SessionCache) -> Self {
        Self {
            session: Session::Unknown,
            cache,
            generation: 0,
        }
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Seed the session from the cache without touching the network.
    ///
    /// Returns `true` when a cached identity was adopted and still needs
    /// server confirmation.
    pub fn hydrate_from_cache(&mut self) -> bool {
        match self.read_cache() {
            Some(identity) => {
                info!("Hydrated session from cache: {}", identity.email);
                self.session = Session::Authenticated(identity);
                true
            }
            None => {
                debug!("No cached identity, session is anonymous");
                self.session = Session::Anonymous;
                false
            }
        }
    }

    /// Startup sequence: optimistic cache read, then server reconciliation.
    pub async fn hydrate(&mut self, client: &AuthClient) -> &Session {
        if self.hydrate_from_cache() {
            self.verify(client).await
        } else {
            &self.session
        }
    }

    /// Start a verification. `None` means the cache is empty and no request
    /// should be made; the session is then `Anonymous`.
    pub fn begin_verify(&mut self) -> Option<VerifyTicket> {
        if self.read_cache().is_none() {
            self.session = Session::Anonymous;
            return None;
        }

        Some(VerifyTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the "current identity" call.
    ///
    /// Success overwrites session and cache with server truth; any failure
    /// clears both. Returns `false` if the result was stale and ignored.
    pub fn complete_verify(&mut self, ticket: VerifyTicket, result: ClientResult<Identity>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale verification (ticket {}, current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(identity) => {
                info!("Session verified: {}", identity.email);
                self.write(Some(identity));
            }
            Err(e) => {
                warn!("Session verification failed, signing out locally: {e}");
                self.write(None);
            }
        }

        true
    }

    /// Confirm the cached identity with the server (one request at most).
    pub async fn verify(&mut self, client: &AuthClient) -> &Session {
        if let Some(ticket) = self.begin_verify() {
            let result = client.me().await;
            self.complete_verify(ticket, result);
        }

        &self.session
    }

    /// Explicit overwrite used when a login, registration, OAuth callback or
    /// logout completes. Invalidates in-flight verifications.
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        self.generation += 1;

        match &identity {
            Some(identity) => info!("Identity set: {} ({})", identity.email, identity.id),
            None => info!("Identity cleared"),
        }

        self.write(identity);
    }

    /// Adopt whatever the cache holds now, e.g. after another client instance
    /// changed it. No network call. Returns `true` if the session changed.
    pub fn sync_from_cache(&mut self) -> bool {
        let next = Session::from(self.read_cache());

        if next == self.session {
            return false;
        }

        info!(
            "Session changed externally: {} -> {}",
            self.session.as_str(),
            next.as_str()
        );
        self.session = next;
        self.generation += 1;
        true
    }

    /// Update memory and cache together. Cache failures are logged only;
    /// the in-memory session stays authoritative.
    fn write(&mut self, identity: Option<Identity>) {
        match &identity {
            Some(identity) => {
                if let Err(e) = self.cache.save(identity) {
                    warn!("Failed to cache identity: {e} ({})", e.recovery_hint());
                }
            }
            None => {
                if let Err(e) = self.cache.clear() {
                    warn!("Failed to clear session cache: {e} ({})", e.recovery_hint());
                }
            }
        }

        self.session = Session::from(identity);
    }

    /// Cached identity, treating unreadable or corrupt content as absent.
    fn read_cache(&self) -> Option<Identity> {
        let loaded = match self.cache.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Session cache unreadable, treating as absent: {e}");
                return None;
            }
        };

        if loaded.is_corrupted()
            && let Err(e) = self.cache.backup_corrupted()
        {
            warn!("{e} ({})", e.recovery_hint());
            if let Err(e) = self.cache.clear() {
                warn!("Failed to clear corrupted session cache: {e}");
            }
        }

        loaded.identity
    }
}
