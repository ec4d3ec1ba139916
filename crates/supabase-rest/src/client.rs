//! Client Core
//!
//! Holds the project URL, anon key, HTTP client and session store.
//! Auth and PostgREST operations are implemented in their own modules.

use std::rc::Rc;

use reqwest::{Method, RequestBuilder, Response, Url};
use tokio::sync::Mutex;
use tracing::warn;

use crate::auth::AuthSession;
use crate::error::{error_message, Result, SupabaseError};
use crate::postgrest::TableQuery;
use crate::session::SessionStore;

/// Async client bound to one Supabase project
#[derive(Clone, Debug)]
pub struct SupabaseClient<S> {
    http: reqwest::Client,
    url: String,
    anon_key: String,
    storage_key: String,
    store: S,
    /// Held for the whole check-and-refresh; clones share it
    refresh_lock: Rc<Mutex<()>>,
}

impl<S: SessionStore> SupabaseClient<S> {
    pub fn new(url: &str, anon_key: &str, store: S) -> Self {
        let url = url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            storage_key: storage_key_for(&url),
            url,
            anon_key: anon_key.to_string(),
            store,
            refresh_lock: Rc::new(Mutex::new(())),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Key under which the auth session is persisted
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Start a PostgREST query against `table`
    pub fn from(&self, table: &str) -> TableQuery<'_, S> {
        TableQuery::new(self, table)
    }

    pub(crate) fn request(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    pub(crate) fn refresh_lock(&self) -> &Mutex<()> {
        &self.refresh_lock
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Token for data requests: the user's access token, else the anon key.
    pub(crate) async fn bearer_token(&self) -> Result<String> {
        Ok(match self.get_session().await? {
            Some(session) => session.access_token,
            None => self.anon_key.clone(),
        })
    }

    pub(crate) fn stored_session(&self) -> Result<Option<AuthSession>> {
        let Some(raw) = self.store.load(&self.storage_key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(error = %err, "discarding unreadable stored session");
                self.store.remove(&self.storage_key)?;
                Ok(None)
            }
        }
    }

    pub(crate) fn persist_session(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.store.save(&self.storage_key, &raw)
    }

    pub(crate) fn clear_session(&self) -> Result<()> {
        self.store.remove(&self.storage_key)
    }
}

/// Turn non-2xx responses into `SupabaseError::Api`.
pub(crate) async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SupabaseError::Api {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// `sb-<project-ref>-auth-token`, the key supabase-js uses.
fn storage_key_for(url: &str) -> String {
    let project_ref = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|host| host.split('.').next().unwrap_or(host).to_string()))
        .unwrap_or_else(|| "local".to_string());
    format!("sb-{}-auth-token", project_ref)
}
