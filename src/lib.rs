//! # cadastro-alunos
//!
//! Leptos + WASM client for a student-records REST backend. Users log in
//! with e-mail and password, then list, create, edit, and delete students
//! and upload their photos.
//!
//! The auth core (session store, transition handler, route guard, and
//! credential persistence) is plain Rust and tested natively; browser glue
//! is gated behind the `csr` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: logging, panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = config::AppConfig::from_env_or_default();
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("{e}; using defaults");
    }
    log::info!("starting against {}", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <app::App config/> });
}
