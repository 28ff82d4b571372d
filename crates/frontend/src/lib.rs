pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = AppConfig::from_query(&shared::config::current_query());

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .map(AppConfig::log_level)
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Invalid query-string config, using defaults: {}", e);
        AppConfig::default()
    });
    log::debug!("Starting with {:?}", config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
