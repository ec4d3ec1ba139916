//! Supabase REST Client
//!
//! Minimal async client for a hosted Supabase project:
//! - auth: GoTrue password sign-in, session restore/refresh, sign-out
//! - postgrest: table queries with filters
//! - session: pluggable persistence for the auth session
//!
//! Runs in the browser (reqwest uses `fetch` on wasm32) and natively for tests.

mod auth;
mod client;
mod error;
mod postgrest;
mod session;

pub use auth::{AuthSession, AuthUser};
pub use client::SupabaseClient;
pub use error::{Result, SupabaseError};
pub use postgrest::TableQuery;
pub use session::{MemoryStore, SessionStore};
#[cfg(target_arch = "wasm32")]
pub use session::LocalStorageStore;
