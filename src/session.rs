//! Session collaborators: the logout call and the local session store.
//!
//! # Connection Lifecycle
//!
//! The HTTP service holds one `reqwest::Client` for the lifetime of the app.
//! When no `base_url` is configured the offline service is used instead and
//! logout only clears local state.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::SessionConfig;
use crate::user::UserProfile;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("logout request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected logout ({0})")]
    Rejected(reqwest::StatusCode),
}

/// Network side of session termination
#[async_trait]
pub trait SessionService: Send + Sync {
    async fn logout(&self) -> Result<(), SessionError>;
}

/// `POST {base_url}/auth/logout` with the session's bearer token
pub struct HttpSessionService {
    client: reqwest::Client,
    logout_url: String,
    token: Option<String>,
}

impl HttpSessionService {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SessionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            logout_url: format!("{}/auth/logout", base_url.trim_end_matches('/')),
            token,
        })
    }
}

#[async_trait]
impl SessionService for HttpSessionService {
    async fn logout(&self) -> Result<(), SessionError> {
        tracing::info!("Logging out via {}", self.logout_url);
        let mut request = self.client.post(&self.logout_url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Rejected(status));
        }
        Ok(())
    }
}

/// Used when no session server is configured
pub struct OfflineSessionService;

#[async_trait]
impl SessionService for OfflineSessionService {
    async fn logout(&self) -> Result<(), SessionError> {
        tracing::debug!("No session server configured, logging out locally");
        Ok(())
    }
}

/// Pick the session service for the configured endpoint.
///
/// Falls back to the offline service if the HTTP client cannot be built.
pub fn service_from_config(config: &SessionConfig) -> Arc<dyn SessionService> {
    let Some(ref base_url) = config.base_url else {
        return Arc::new(OfflineSessionService);
    };

    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    match HttpSessionService::new(base_url, config.token.clone(), timeout) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::warn!("Session client unavailable, using offline logout: {}", e);
            Arc::new(OfflineSessionService)
        }
    }
}

/// Local session state: who is signed in
#[derive(Debug, Default)]
pub struct SessionStore {
    user: Option<UserProfile>,
}

impl SessionStore {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        tracing::info!("Signed in as {}", user.display_name());
        self.user = Some(user);
    }

    pub fn clear_session(&mut self) {
        if self.user.take().is_some() {
            tracing::info!("Session cleared");
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
