//! Items CRUD Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod store;

use app::App;
use api::HttpItemApi;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(config.log_level);

    let api = match HttpItemApi::new(&config.api) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Not starting: {}", err);
            return;
        }
    };
    log::info!("Using items endpoint {}", api.collection_url());

    let resync_policy = config.resync_policy;
    mount_to_body(move || view! { <App api=api resync_policy=resync_policy /> });
}
