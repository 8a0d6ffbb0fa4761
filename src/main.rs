//! Todo App Frontend Entry Point

mod models;
mod error;
mod config;
mod graphql;
mod todos;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("[APP] GraphQL endpoint: {}", config.endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
