//! Task Manager Frontend Entry Point

mod app;
mod backend;
mod components;
mod config;
mod context;
mod models;
mod notify;
mod state;
mod view_model;

use app::{App, StartupError};
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match AppConfig::from_build_env() {
        Ok(config) => {
            init_logging(config.log_level);
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => {
            init_logging(tracing::Level::INFO);
            tracing::error!(error = %err, "cannot start");
            let message = err.to_string();
            mount_to_body(move || view! { <StartupError message=message /> });
        }
    }
}

/// Route `tracing` to the browser console
fn init_logging(level: tracing::Level) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
