//! Application Context
//!
//! The view model and its state signal, provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::SupabaseBackend;
use crate::notify::AlertNotifier;
use crate::state::ViewState;
use crate::view_model::ViewModel;

/// Where the auth session is kept: `localStorage` in the browser
#[cfg(target_arch = "wasm32")]
pub type SessionBackingStore = supabase_rest::LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
pub type SessionBackingStore = supabase_rest::MemoryStore;

pub fn open_session_store() -> supabase_rest::Result<SessionBackingStore> {
    #[cfg(target_arch = "wasm32")]
    {
        supabase_rest::LocalStorageStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(supabase_rest::MemoryStore::new())
    }
}

/// View model wired to the hosted backend and the reactive state
pub type AppViewModel = ViewModel<SupabaseBackend<SessionBackingStore>, RwSignal<ViewState>, AlertNotifier>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page state - read with `.with()` for tracking
    pub state: RwSignal<ViewState>,
    /// Not `Send`, so kept in local arena storage
    view_model: StoredValue<AppViewModel, LocalStorage>,
}

impl AppContext {
    pub fn new(view_model: AppViewModel) -> Self {
        Self {
            state: *view_model.state(),
            view_model: StoredValue::new_local(view_model),
        }
    }

    pub fn view_model(&self) -> AppViewModel {
        self.view_model.get_value()
    }

    /// Run a view model operation on the event loop
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppViewModel) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.view_model()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use supabase_rest::SessionStore;

    #[test]
    fn test_native_session_store_is_in_memory() {
        let store = open_session_store().unwrap();
        store.save("sb-demo-auth-token", "{}").unwrap();
        assert_eq!(store.load("sb-demo-auth-token").unwrap().as_deref(), Some("{}"));
    }
}
