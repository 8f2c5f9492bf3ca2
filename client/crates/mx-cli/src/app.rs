use crate::{CliError, CliResult, Commands};

use std::path::PathBuf;
use std::time::Duration;

use log::warn;
use mx_auth::{
    AuthClient, CookieFile, Credentials, GuardDecision, Navigation, OAuthCallback, Route,
    RouteGuard, SessionCache, SessionStore, flows,
};
use mx_core::Session;
use reqwest::Url;
use serde_json::{Value, json};

/// One process run: the auth client, the Session Store, and the cookie
/// file that carries the server session between runs.
pub struct App {
    client: AuthClient,
    store: SessionStore,
    cookies: CookieFile,
    base_url: Url,
    signed_out: bool,
}

impl App {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        identity_path: PathBuf,
        cookie_path: PathBuf,
    ) -> CliResult<Self> {
        let client = AuthClient::new(base_url, timeout)?;
        let parsed = client.url().map_err(|e| CliError::Url {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let cookies = CookieFile::new(cookie_path);
        if let Err(e) = cookies.restore(client.jar(), &parsed) {
            warn!("Ignoring unreadable cookie file: {e}");
        }

        Ok(Self {
            client,
            store: SessionStore::new(SessionCache::new(identity_path)),
            cookies,
            base_url: parsed,
            signed_out: false,
        })
    }

    pub fn session(&self) -> &Session {
        self.store.current_session()
    }

    /// Run one command and return its JSON result.
    pub async fn execute(&mut self, command: Commands) -> CliResult<Value> {
        let result = self.dispatch(command).await;
        if self.signed_out {
            self.discard_cookies();
        } else {
            self.persist_cookies();
        }
        result
    }

    async fn dispatch(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                self.submit(Route::Login { error: None }, Credentials::new(email, password))
                    .await
            }
            Commands::Register { email, password } => {
                self.submit(Route::Register, Credentials::new(email, password))
                    .await
            }
            Commands::Logout => {
                self.store.hydrate_from_cache();
                let navigation = flows::logout(&mut self.store, &self.client).await?;
                self.signed_out = true;
                Ok(self.outcome(Some(&navigation)))
            }
            Commands::Whoami => {
                self.store.hydrate(&self.client).await;
                Ok(self.outcome(None))
            }
            Commands::Callback { url } => {
                self.store.hydrate_from_cache();
                let query = callback_query(&url);
                let navigation = OAuthCallback::new().process(&mut self.store, &query);
                Ok(self.outcome(navigation.as_ref()))
            }
            Commands::Open { route } => {
                self.store.hydrate(&self.client).await;
                let decision = RouteGuard::check(self.store.current_session(), Route::parse(&route));
                Ok(json!({
                    "decision": decision,
                    "session": self.store.current_session(),
                }))
            }
            Commands::OauthUrl => Ok(json!({ "url": self.client.oauth_entry_url() })),
        }
    }

    /// Login/registration: an already-authenticated session is sent home
    /// without submitting anything.
    async fn submit(&mut self, route: Route, credentials: Credentials) -> CliResult<Value> {
        self.store.hydrate(&self.client).await;

        if let GuardDecision::Redirect { navigation } =
            RouteGuard::check(self.store.current_session(), route.clone())
        {
            return Ok(self.outcome(Some(&navigation)));
        }

        let navigation = match route {
            Route::Register => flows::register(&mut self.store, &self.client, &credentials).await?,
            _ => flows::login(&mut self.store, &self.client, &credentials).await?,
        };

        Ok(self.outcome(Some(&navigation)))
    }

    fn outcome(&self, navigation: Option<&Navigation>) -> Value {
        json!({
            "navigation": navigation,
            "session": self.store.current_session(),
        })
    }

    /// The server session is gone; don't replay its cookie on the next run.
    fn discard_cookies(&self) {
        if let Err(e) = self.cookies.clear() {
            warn!("Failed to remove session cookie: {e} ({})", e.recovery_hint());
        }
    }

    fn persist_cookies(&self) {
        if let Err(e) = self.cookies.persist(self.client.jar(), &self.base_url) {
            warn!("Failed to persist session cookie: {e} ({})", e.recovery_hint());
        }
    }
}

/// Accepts a full callback URL, a `/auth/callback?...` path, or a bare query.
pub(crate) fn callback_query(input: &str) -> String {
    let input = input.trim();

    if let Ok(url) = Url::parse(input) {
        return url.query().unwrap_or_default().to_string();
    }

    match input.split_once('?') {
        Some((_, query)) => query.to_string(),
        None => input.to_string(),
    }
}
