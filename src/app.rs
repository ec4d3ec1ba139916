//! Task Manager App
//!
//! Root component: wires the view model to Supabase and switches between
//! the logged-out and logged-in views.

use std::rc::Rc;

use leptos::prelude::*;
use supabase_rest::SupabaseClient;
use tracing::error;

use crate::backend::SupabaseBackend;
use crate::components::{LoginForm, TaskBoard};
use crate::config::AppConfig;
use crate::context::{open_session_store, AppContext};
use crate::notify::AlertNotifier;
use crate::state::ViewState;
use crate::view_model::ViewModel;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = match open_session_store() {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "cannot persist sessions");
            return view! { <StartupError message=err.to_string() /> }.into_any();
        }
    };

    // State
    let state = RwSignal::new(ViewState::default());
    let client = SupabaseClient::new(&config.supabase_url, &config.supabase_anon_key, store);
    let view_model = ViewModel::new(Rc::new(SupabaseBackend::new(client)), state, Rc::new(AlertNotifier));

    let ctx = AppContext::new(view_model);
    provide_context(ctx);

    // Restore an existing session on mount
    Effect::new(move |_| {
        ctx.spawn(|vm| async move { vm.restore_session().await });
    });

    view! {
        <div class="app">
            <h1>"Supabase Authentication & Task Manager"</h1>
            <Show
                when=move || state.with(ViewState::is_signed_in)
                fallback=|| view! { <LoginForm /> }
            >
                <TaskBoard />
            </Show>
        </div>
    }
    .into_any()
}

/// Shown instead of the app when it cannot be wired up
#[component]
pub fn StartupError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="startup-error">
            <h1>"Supabase Authentication & Task Manager"</h1>
            <p>{message}</p>
        </div>
    }
}
