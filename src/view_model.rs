//! View Model
//!
//! Mediates between user actions and the backend. Each operation reads what
//! it needs from the state, awaits one backend call, then applies a single
//! transition. Nothing is borrowed across the await, so operations can be in
//! flight together; their effects land in response-arrival order. There is
//! no retry and no deduplication.

use std::rc::Rc;

use tracing::{debug, error, info};

use crate::backend::TaskBackend;
use crate::models::TaskId;
use crate::notify::Notifier;
use crate::state::StateHandle;

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed! Check your email and password.";
pub const LOGGED_OUT: &str = "Logged out successfully!";

pub struct ViewModel<B, S, N> {
    backend: Rc<B>,
    state: S,
    notifier: Rc<N>,
}

impl<B, S: Clone, N> Clone for ViewModel<B, S, N> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: self.state.clone(),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<B, S, N> ViewModel<B, S, N>
where
    B: TaskBackend,
    S: StateHandle,
    N: Notifier,
{
    pub fn new(backend: Rc<B>, state: S, notifier: Rc<N>) -> Self {
        Self { backend, state, notifier }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    // ========================
    // Input
    // ========================

    pub fn set_new_task(&self, title: String) {
        self.state.write(|s| s.new_task = title);
    }

    pub fn set_email(&self, email: String) {
        self.state.write(|s| s.credentials.email = email);
    }

    pub fn set_password(&self, password: String) {
        self.state.write(|s| s.credentials.password = password);
    }

    // ========================
    // Session
    // ========================

    /// Pick up a session from an earlier visit; run once at mount.
    pub async fn restore_session(&self) {
        let session = match self.backend.current_session().await {
            Ok(session) => session,
            Err(err) => {
                debug!(error = %err, "no session restored");
                None
            }
        };
        let signed_in = session.is_some();
        self.state.write(|s| s.apply_session(session));

        if signed_in {
            self.load_tasks().await;
        }
    }

    pub async fn login(&self) {
        let credentials = self.state.read(|s| s.credentials.clone());

        match self.backend.sign_in(&credentials.email, &credentials.password).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "logged in");
                self.state.write(|s| s.apply_session(Some(session)));
                self.notifier.notify(LOGIN_SUCCEEDED);
                self.load_tasks().await;
            }
            Err(err) => {
                error!(error = %err, "Login error");
                self.notifier.notify(LOGIN_FAILED);
            }
        }
    }

    pub async fn logout(&self) {
        match self.backend.sign_out().await {
            Ok(()) => {
                self.state.write(|s| s.apply_signed_out());
                self.notifier.notify(LOGGED_OUT);
            }
            Err(err) => error!(error = %err, "Logout error"),
        }
    }

    // ========================
    // Tasks
    // ========================

    pub async fn load_tasks(&self) {
        match self.backend.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "tasks loaded");
                self.state.write(|s| s.apply_tasks_loaded(tasks));
            }
            Err(err) => error!(error = %err, "Error fetching tasks"),
        }
    }

    /// Create a task from the draft; an empty draft is ignored.
    pub async fn add_task(&self) {
        let title = self.state.read(|s| s.new_task.clone());
        if title.is_empty() {
            return;
        }

        match self.backend.insert_task(&title).await {
            Ok(created) => self.state.write(|s| s.apply_tasks_added(created)),
            Err(err) => error!(error = %err, "Error adding task"),
        }
    }

    pub async fn complete_task(&self, id: TaskId) {
        if !self.knows(&id) {
            debug!(%id, "complete requested for unknown task");
            return;
        }

        match self.backend.complete_task(&id).await {
            Ok(()) => self.state.write(|s| s.apply_task_completed(&id)),
            Err(err) => error!(error = %err, %id, "Error marking task as completed"),
        }
    }

    pub async fn delete_task(&self, id: TaskId) {
        if !self.knows(&id) {
            debug!(%id, "delete requested for unknown task");
            return;
        }

        match self.backend.delete_task(&id).await {
            Ok(()) => self.state.write(|s| s.apply_task_deleted(&id)),
            Err(err) => error!(error = %err, %id, "Error deleting task"),
        }
    }

    fn knows(&self, id: &TaskId) -> bool {
        self.state.read(|s| s.has_task(id))
    }
}
