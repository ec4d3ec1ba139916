//! Backend Seam
//!
//! The operations the page needs from the hosted backend. The view model
//! only sees this trait and a message-carrying error.

mod supabase;
#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Session, Task, TaskId};

pub use supabase::SupabaseBackend;

/// Common result type for backend calls
pub type BackendResult<T> = Result<T, BackendError>;

/// Any backend failure; callers never discriminate by kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<supabase_rest::SupabaseError> for BackendError {
    fn from(err: supabase_rest::SupabaseError) -> Self {
        Self::new(err.to_string())
    }
}

/// Auth + task storage collaborator
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TaskBackend {
    /// Session left over from an earlier visit, if any
    async fn current_session(&self) -> BackendResult<Option<Session>>;

    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session>;

    async fn sign_out(&self) -> BackendResult<()>;

    /// Tasks visible to the current principal
    async fn list_tasks(&self) -> BackendResult<Vec<Task>>;

    /// Insert an incomplete task and return the created rows
    async fn insert_task(&self, title: &str) -> BackendResult<Vec<Task>>;

    /// Set `completed = true`
    async fn complete_task(&self, id: &TaskId) -> BackendResult<()>;

    async fn delete_task(&self, id: &TaskId) -> BackendResult<()>;
}
