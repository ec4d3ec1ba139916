//! New Task Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Draft input plus the add action
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="new-task-form">
            <input
                type="text"
                placeholder="Enter a new task"
                prop:value=move || ctx.state.with(|s| s.new_task.clone())
                on:input=move |ev| ctx.view_model().set_new_task(event_target_value(&ev))
            />
            <button on:click=move |_| ctx.spawn(|vm| async move { vm.add_task().await })>
                "Add Task"
            </button>
        </div>
    }
}
