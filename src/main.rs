//! Notes Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.as_ref().map(|c| c.log_level).unwrap_or(LevelFilter::Info));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
