//! GoTrue Auth
//!
//! Password sign-in, session restore with token refresh, and sign-out.
//! The session is persisted through the client's `SessionStore`.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::{check, SupabaseClient};
use crate::error::Result;
use crate::session::SessionStore;

/// Refresh this many seconds before the token actually expires
const EXPIRY_MARGIN_SECS: i64 = 10;

/// Authenticated user as returned by GoTrue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token pair plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    /// Unix seconds; older GoTrue versions omit it
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl AuthSession {
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(at) => at - EXPIRY_MARGIN_SECS <= now,
            None => false,
        }
    }

    fn stamped(mut self, now: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now + self.expires_in);
        }
        self
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl<S: SessionStore> SupabaseClient<S> {
    /// `POST /auth/v1/token?grant_type=password`
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "/auth/v1/token", self.anon_key())
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password })
            .send()
            .await?;
        let session: AuthSession = check(response).await?.json().await?;
        let session = session.stamped(now());
        self.persist_session(&session)?;
        info!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Stored session, refreshed first when it has expired.
    ///
    /// Concurrent callers share one refresh: the first refreshes, the rest
    /// wait on the lock and pick up what it stored. A failed refresh drops
    /// the stored session and returns the error, unless another client
    /// sharing the store has rotated the refresh token meanwhile.
    pub async fn get_session(&self) -> Result<Option<AuthSession>> {
        match self.stored_session()? {
            Some(session) if !session.is_expired(now()) => return Ok(Some(session)),
            Some(_) => {}
            None => return Ok(None),
        }

        let _refreshing = self.refresh_lock().lock().await;
        let Some(session) = self.stored_session()? else {
            return Ok(None);
        };
        if !session.is_expired(now()) {
            return Ok(Some(session));
        }

        debug!(user_id = %session.user.id, "stored session expired, refreshing");
        match self.refresh_session(&session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(err) => {
                if let Some(latest) = self.stored_session()? {
                    if latest.refresh_token != session.refresh_token {
                        debug!(error = %err, "refresh lost to a newer session");
                        return Ok(Some(latest));
                    }
                }
                self.clear_session()?;
                Err(err)
            }
        }
    }

    /// `POST /auth/v1/token?grant_type=refresh_token`
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "/auth/v1/token", self.anon_key())
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshGrant { refresh_token })
            .send()
            .await?;
        let session: AuthSession = check(response).await?.json().await?;
        let session = session.stamped(now());
        self.persist_session(&session)?;
        Ok(session)
    }

    /// `POST /auth/v1/logout`, then forget the stored session.
    ///
    /// A token the server no longer recognizes counts as signed out.
    pub async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.stored_session()? else {
            return Ok(());
        };

        let response = self
            .request(Method::POST, "/auth/v1/logout", &session.access_token)
            .send()
            .await?;
        match check(response).await {
            Ok(_) => {}
            Err(err) if matches!(err.status(), Some(401 | 403 | 404)) => {
                debug!(error = %err, "server session already gone");
            }
            Err(err) => return Err(err),
        }

        self.clear_session()?;
        info!(user_id = %session.user.id, "signed out");
        Ok(())
    }
}
