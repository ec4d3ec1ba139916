//! Login Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Email/password form of the logged-out view
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="login">
            <h2>"Login"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || ctx.state.with(|s| s.credentials.email.clone())
                on:input=move |ev| ctx.view_model().set_email(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || ctx.state.with(|s| s.credentials.password.clone())
                on:input=move |ev| ctx.view_model().set_password(event_target_value(&ev))
            />
            <button on:click=move |_| ctx.spawn(|vm| async move { vm.login().await })>
                "Login"
            </button>
        </div>
    }
}
