use crate::app::App;
use leptos::prelude::*;
use shared::StudioConfig;

pub mod app;
pub mod browser_storage;
pub mod components;
pub mod models;
pub mod pages;

fn main() {
    console_error_panic_hook::set_once();
    let config = StudioConfig::from_build_env();
    if let Some(level) = config.console_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("DateSave Studio starting, log level {}", config.log_level);
    mount_to_body(move || {
        view! { <App config=config /> }
    })
}
