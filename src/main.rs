//! Browser entry point. The view layer only exists on `wasm32`; the domain core
//! (session, credential gate, record manager) compiles on the host so it can be
//! unit-tested without a browser.

#[cfg(target_arch = "wasm32")]
mod app;
// On the host these are only reached from tests; the views that call them are
// wasm-only.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = app_lib::config::AppConfig::load();
    app_lib::telemetry::init(&config.log_level);
    tracing::info!(
        api_base_url = %config.api_base_url,
        commit = app_lib::build_info::git_commit_hash(),
        "starting usuarios-web"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
