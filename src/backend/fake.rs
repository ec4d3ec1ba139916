//! In-memory `TaskBackend` for view model tests.
//!
//! Records every call, can be told to fail an operation, and can hold
//! insert responses until the test releases them.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{BackendError, BackendResult, TaskBackend};
use crate::models::{Session, Task, TaskId};
use crate::notify::Notifier;

#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<String>>,
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<i32>,
    session: RefCell<Option<Session>>,
    accounts: RefCell<Vec<(String, String, Session)>>,
    failing: RefCell<HashSet<&'static str>>,
    insert_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.borrow_mut() = tasks;
        self
    }

    pub fn with_session(self, session: Session) -> Self {
        *self.session.borrow_mut() = Some(session);
        self
    }

    pub fn with_account(self, email: &str, password: &str, user_id: &str) -> Self {
        self.accounts
            .borrow_mut()
            .push((email.to_string(), password.to_string(), Session::new(user_id, email)));
        self
    }

    /// Make every call to `op` fail from now on
    pub fn fail(&self, op: &'static str) {
        self.failing.borrow_mut().insert(op);
    }

    /// Hold the next not-yet-gated insert until the sender fires
    pub fn gate_next_insert(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.insert_gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn stored_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn record(&self, op: &'static str, arg: &str) -> BackendResult<()> {
        let call = if arg.is_empty() { op.to_string() } else { format!("{}:{}", op, arg) };
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(op) {
            return Err(BackendError::new(format!("{} failed", op)));
        }
        Ok(())
    }
}

/// Notifications land in the same call log, so tests can check ordering.
impl Notifier for FakeBackend {
    fn notify(&self, message: &str) {
        self.calls.borrow_mut().push(format!("notify:{}", message));
    }
}

#[async_trait(?Send)]
impl TaskBackend for FakeBackend {
    async fn current_session(&self) -> BackendResult<Option<Session>> {
        self.record("current_session", "")?;
        Ok(self.session.borrow().clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.record("sign_in", email)?;
        let session = self
            .accounts
            .borrow()
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, session)| session.clone())
            .ok_or_else(|| BackendError::new("Invalid login credentials"))?;
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> BackendResult<()> {
        self.record("sign_out", "")?;
        *self.session.borrow_mut() = None;
        Ok(())
    }

    async fn list_tasks(&self) -> BackendResult<Vec<Task>> {
        self.record("list_tasks", "")?;
        Ok(self.tasks.borrow().clone())
    }

    async fn insert_task(&self, title: &str) -> BackendResult<Vec<Task>> {
        self.record("insert_task", title)?;
        let id = self.next_id.get() + 100;
        self.next_id.set(self.next_id.get() + 1);

        let gate = self.insert_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let task = Task::new(id, title, false);
        self.tasks.borrow_mut().push(task.clone());
        Ok(vec![task])
    }

    async fn complete_task(&self, id: &TaskId) -> BackendResult<()> {
        self.record("complete_task", id.as_str())?;
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|t| &t.id == id) {
            task.completed = true;
        }
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> BackendResult<()> {
        self.record("delete_task", id.as_str())?;
        self.tasks.borrow_mut().retain(|t| &t.id != id);
        Ok(())
    }
}
