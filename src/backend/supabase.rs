//! Supabase-backed `TaskBackend`
//!
//! Auth goes through GoTrue, tasks live in the `tasks` table behind
//! row-level security, so every query is implicitly scoped to the user.

use async_trait::async_trait;
use serde::Serialize;
use supabase_rest::{AuthUser, SessionStore, SupabaseClient};

use super::{BackendResult, TaskBackend};
use crate::models::{Session, Task, TaskId};

const TASKS_TABLE: &str = "tasks";

#[derive(Serialize)]
struct NewTask<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

/// `TaskBackend` over a Supabase project
pub struct SupabaseBackend<S> {
    client: SupabaseClient<S>,
}

impl<S: SessionStore> SupabaseBackend<S> {
    pub fn new(client: SupabaseClient<S>) -> Self {
        Self { client }
    }
}

fn session_from(user: &AuthUser) -> Session {
    Session::new(&user.id, user.email.as_deref().unwrap_or_default())
}

#[async_trait(?Send)]
impl<S: SessionStore> TaskBackend for SupabaseBackend<S> {
    async fn current_session(&self) -> BackendResult<Option<Session>> {
        let session = self.client.get_session().await?;
        Ok(session.map(|s| session_from(&s.user)))
    }

    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        let session = self.client.sign_in_with_password(email, password).await?;
        Ok(session_from(&session.user))
    }

    async fn sign_out(&self) -> BackendResult<()> {
        Ok(self.client.sign_out().await?)
    }

    async fn list_tasks(&self) -> BackendResult<Vec<Task>> {
        Ok(self.client.from(TASKS_TABLE).select("*").execute_json().await?)
    }

    async fn insert_task(&self, title: &str) -> BackendResult<Vec<Task>> {
        let rows = [NewTask { title, completed: false }];
        Ok(self
            .client
            .from(TASKS_TABLE)
            .insert(&rows)
            .select("*")
            .execute_json()
            .await?)
    }

    async fn complete_task(&self, id: &TaskId) -> BackendResult<()> {
        Ok(self
            .client
            .from(TASKS_TABLE)
            .update(&CompletedPatch { completed: true })
            .eq("id", id)
            .execute()
            .await?)
    }

    async fn delete_task(&self, id: &TaskId) -> BackendResult<()> {
        Ok(self.client.from(TASKS_TABLE).delete().eq("id", id).execute().await?)
    }
}
