//! Task Board Component
//!
//! The logged-in view: greeting, logout, new-task form and the list.

use leptos::prelude::*;

use super::{NewTaskForm, TaskRow};
use crate::context::use_app_context;

#[component]
pub fn TaskBoard() -> impl IntoView {
    let ctx = use_app_context();

    let email = move || {
        ctx.state
            .with(|s| s.session.as_ref().map(|session| session.email.clone()))
            .unwrap_or_default()
    };
    let has_tasks = move || ctx.state.with(|s| !s.tasks.is_empty());

    view! {
        <div class="task-board">
            <p>"Welcome, " {email} "!"</p>
            <button on:click=move |_| ctx.spawn(|vm| async move { vm.logout().await })>
                "Logout"
            </button>

            <h2>"Your Tasks"</h2>
            <NewTaskForm />

            <Show when=has_tasks fallback=|| view! { <p>"No tasks yet!"</p> }>
                <ul class="task-list">
                    // Keyed on completion too, so a completed row re-renders
                    <For
                        each=move || ctx.state.with(|s| s.tasks.clone())
                        key=|task| (task.id.clone(), task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </div>
    }
}
