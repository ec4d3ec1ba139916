//! PostgREST Queries
//!
//! Builder over `/rest/v1/<table>`, shaped like supabase-js:
//! `client.from("tasks").update(&patch).eq("id", 1).execute().await`.

use std::fmt::Display;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::client::{check, SupabaseClient};
use crate::error::{Result, SupabaseError};
use crate::session::SessionStore;

const RETURN_MINIMAL: &str = "return=minimal";
const RETURN_REPRESENTATION: &str = "return=representation";

/// A single PostgREST request under construction
pub struct TableQuery<'a, S> {
    client: &'a SupabaseClient<S>,
    table: String,
    method: Method,
    params: Vec<(String, String)>,
    body: Option<serde_json::Result<serde_json::Value>>,
    prefer: Option<&'static str>,
}

impl<'a, S: SessionStore> TableQuery<'a, S> {
    pub(crate) fn new(client: &'a SupabaseClient<S>, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            method: Method::GET,
            params: Vec::new(),
            body: None,
            prefer: None,
        }
    }

    /// Columns to return. After a mutation this asks for the affected rows.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.to_string()));
        if self.method != Method::GET {
            self.prefer = Some(RETURN_REPRESENTATION);
        }
        self
    }

    pub fn insert<T: Serialize + ?Sized>(self, rows: &T) -> Self {
        self.mutation(Method::POST, Some(serde_json::to_value(rows)))
    }

    pub fn update<T: Serialize + ?Sized>(self, patch: &T) -> Self {
        self.mutation(Method::PATCH, Some(serde_json::to_value(patch)))
    }

    pub fn delete(self) -> Self {
        self.mutation(Method::DELETE, None)
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Run the request and discard the response body
    pub async fn execute(self) -> Result<()> {
        self.send().await?;
        Ok(())
    }

    /// Run the request and decode the JSON response
    pub async fn execute_json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(self.send().await?.json().await?)
    }

    fn mutation(mut self, method: Method, body: Option<serde_json::Result<serde_json::Value>>) -> Self {
        let returns_rows = self.params.iter().any(|(key, _)| key == "select");
        self.method = method;
        self.body = body;
        self.prefer = Some(if returns_rows { RETURN_REPRESENTATION } else { RETURN_MINIMAL });
        self
    }

    async fn send(self) -> Result<reqwest::Response> {
        let bearer = self.client.bearer_token().await?;
        let path = format!("/rest/v1/{}", self.table);
        debug!(method = %self.method, table = %self.table, "postgrest request");

        let mut request = self
            .client
            .request(self.method, &path, &bearer)
            .query(&self.params);
        if let Some(prefer) = self.prefer {
            request = request.header("Prefer", prefer);
        }
        if let Some(body) = self.body {
            let body = body.map_err(SupabaseError::Decode)?;
            request = request.json(&body);
        }

        check(request.send().await?).await
    }
}
