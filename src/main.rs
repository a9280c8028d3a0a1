//! Todo List Frontend Entry Point

mod models;
mod todo;
mod store;
mod logger;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
