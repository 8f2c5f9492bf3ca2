use crate::{ClientError, ClientResult};

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use mx_core::Identity;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url, cookie::Jar};
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ME_PATH: &str = "/api/auth/me";
pub const OAUTH_ENTRY_PATH: &str = "/api/auth/google";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGOUT_FAILED: &str = "Logout failed";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user";

#[derive(Deserialize)]
struct AuthResponse {
    user: Identity,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the authentication API.
///
/// The session cookie set by the server lives in `jar` and rides along on
/// every request.
pub struct AuthClient {
    pub base_url: String,
    client: ReqwestClient,
    jar: Arc<Jar>,
}

impl AuthClient {
    /// Create a client with an empty cookie jar
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:7701")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        Self::with_jar(base_url, timeout, Arc::new(Jar::default()))
    }

    /// Create a client around an existing (possibly pre-seeded) cookie jar
    pub fn with_jar(base_url: &str, timeout: Duration, jar: Arc<Jar>) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            jar,
        })
    }

    pub fn jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    /// Base URL as a parsed `Url`, used to scope cookies
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Where a browser should be sent to start the OAuth flow
    pub fn oauth_entry_url(&self) -> String {
        format!("{}{}", self.base_url, OAUTH_ENTRY_PATH)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send a request and return status plus raw body
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<(StatusCode, String)> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("auth api responded {status}");
        Ok((status, body))
    }

    /// Decode `{user: Identity}`, or turn a non-2xx into an API error
    fn identity_from(status: StatusCode, body: &str, fallback: &str) -> ClientResult<Identity> {
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let response: AuthResponse = serde_json::from_str(body)?;
        response
            .user
            .validate()
            .map_err(|e| ClientError::invalid_identity(e.to_string()))?;

        Ok(response.user)
    }

    async fn submit_credentials(
        &self,
        path: &str,
        email: &str,
        password: &str,
        fallback: &str,
    ) -> ClientResult<Identity> {
        let body = CredentialsRequest { email, password };
        let req = self.request(Method::POST, path).json(&body);
        let (status, body) = self.send(req).await?;
        Self::identity_from(status, &body, fallback)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Identity> {
        debug!("POST {LOGIN_PATH} for {email}");
        self.submit_credentials(LOGIN_PATH, email, password, LOGIN_FAILED)
            .await
    }

    /// Create an account with email and password
    pub async fn register(&self, email: &str, password: &str) -> ClientResult<Identity> {
        debug!("POST {REGISTER_PATH} for {email}");
        self.submit_credentials(REGISTER_PATH, email, password, REGISTRATION_FAILED)
            .await
    }

    /// End the server-side session. Any non-2xx is a generic failure.
    pub async fn logout(&self) -> ClientResult<()> {
        debug!("POST {LOGOUT_PATH}");
        let req = self.request(Method::POST, LOGOUT_PATH);
        let (status, _) = self.send(req).await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), LOGOUT_FAILED));
        }

        Ok(())
    }

    /// Fetch the identity bound to the current session cookie
    pub async fn me(&self) -> ClientResult<Identity> {
        debug!("GET {ME_PATH}");
        let req = self.request(Method::GET, ME_PATH);
        let (status, body) = self.send(req).await?;
        Self::identity_from(status, &body, FETCH_USER_FAILED)
    }
}

