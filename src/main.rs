//! LogiQ Admin Frontend Entry Point

mod api;
mod app;
mod charts;
mod components;
mod config;
mod context;
mod dimension;
mod download;
mod error;
mod models;
mod pages;
mod session;
mod store;
mod table_state;
mod toast;

use app::App;
use config::config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config().log_level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already initialised".into());
    }
    log::info!("[APP] starting, API base {}", config().api_base_url);
    mount_to_body(App);
}
