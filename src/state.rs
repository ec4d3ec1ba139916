//! View State
//!
//! The page's four state slots and one transition per operation outcome.
//! Transitions are pure so they can be applied from any async continuation.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::models::{Credentials, Session, Task, TaskId};

/// Everything the page renders from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Signed-in principal; gates which view renders
    pub session: Option<Session>,
    /// Tasks as of the last successful backend response
    pub tasks: Vec<Task>,
    /// Draft title for the next task
    pub new_task: String,
    /// Login form fields
    pub credentials: Credentials,
}

impl ViewState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn has_task(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| &task.id == id)
    }

    pub fn apply_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Replace the list wholesale
    pub fn apply_tasks_loaded(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append created rows and clear the draft
    pub fn apply_tasks_added(&mut self, created: Vec<Task>) {
        self.tasks.extend(created);
        self.new_task.clear();
    }

    pub fn apply_task_completed(&mut self, id: &TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) {
            task.completed = true;
        }
    }

    pub fn apply_task_deleted(&mut self, id: &TaskId) {
        self.tasks.retain(|task| &task.id != id);
    }

    pub fn apply_signed_out(&mut self) {
        self.session = None;
        self.tasks.clear();
    }
}

/// Where a `ViewModel` keeps its `ViewState`.
///
/// Implementations must not hold a borrow past the closure, so that
/// operations suspended on the backend never block each other.
pub trait StateHandle: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut ViewState));
}

/// Reactive handle used by the components
impl StateHandle for RwSignal<ViewState> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        self.update(f);
    }
}

/// Plain shared cell, for running the view model without a reactive owner
impl StateHandle for Rc<RefCell<ViewState>> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signed_in_with(tasks: Vec<Task>) -> ViewState {
        ViewState {
            session: Some(Session::new("P123", "a@x.com")),
            tasks,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state_is_signed_out_and_empty() {
        let state = ViewState::default();
        assert!(!state.is_signed_in());
        assert!(state.tasks.is_empty());
        assert!(state.new_task.is_empty());
        assert_eq!(state.credentials, Credentials::default());
    }

    #[test]
    fn test_added_rows_append_and_clear_draft() {
        let mut state = signed_in_with(vec![Task::new(1, "Buy milk", false)]);
        state.new_task = "Call mom".into();

        state.apply_tasks_added(vec![Task::new(2, "Call mom", false)]);

        assert_eq!(
            state.tasks,
            vec![Task::new(1, "Buy milk", false), Task::new(2, "Call mom", false)]
        );
        assert_eq!(state.new_task, "");
    }

    #[test]
    fn test_complete_touches_only_matching_task() {
        let mut state = signed_in_with(vec![
            Task::new(1, "Buy milk", false),
            Task::new(2, "Call mom", false),
        ]);

        state.apply_task_completed(&TaskId::from(1));
        state.apply_task_completed(&TaskId::from(1));

        assert_eq!(
            state.tasks,
            vec![Task::new(1, "Buy milk", true), Task::new(2, "Call mom", false)]
        );
    }

    #[test]
    fn test_delete_removes_matching_task() {
        let mut state = signed_in_with(vec![Task::new(1, "Buy milk", false)]);
        state.apply_task_deleted(&TaskId::from(1));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_signed_out_clears_session_and_tasks() {
        let mut state = signed_in_with((1..=50).map(|i| Task::new(i, "t", false)).collect());
        state.new_task = "draft".into();

        state.apply_signed_out();

        assert!(!state.is_signed_in());
        assert!(state.tasks.is_empty());
        assert_eq!(state.new_task, "draft");
    }

    #[test]
    fn test_cell_handle_reads_and_writes() {
        let handle = Rc::new(RefCell::new(ViewState::default()));
        handle.write(|s| s.new_task = "Buy milk".into());
        assert_eq!(handle.read(|s| s.new_task.clone()), "Buy milk");
    }
}
