//! Task Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;

/// One list entry: title, status, and the actions still available
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let complete_id = task.id.clone();
    let delete_id = task.id.clone();

    let complete_button = task.can_complete().then(move || {
        view! {
            <button on:click=move |_| {
                let id = complete_id.clone();
                ctx.spawn(move |vm| async move { vm.complete_task(id).await });
            }>
                "Mark as Completed"
            </button>
        }
    });

    view! {
        <li class="task-row">
            {task.title.clone()} " - " {task.status_label()}
            {complete_button}
            <button on:click=move |_| {
                let id = delete_id.clone();
                ctx.spawn(move |vm| async move { vm.delete_task(id).await });
            }>
                "Delete"
            </button>
        </li>
    }
}
