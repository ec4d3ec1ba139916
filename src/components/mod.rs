//! UI Components
//!
//! The logged-out and logged-in views.

mod login_form;
mod new_task_form;
mod task_board;
mod task_row;

pub use login_form::LoginForm;
pub use new_task_form::NewTaskForm;
pub use task_board::TaskBoard;
pub use task_row::TaskRow;
