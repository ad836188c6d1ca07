//! Food Analyzer Web App (Leptos + WASM)

mod app;
mod components;
mod logger;
pub mod analysis;
pub mod page_config;

use wasm_bindgen::prelude::*;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    leptos::mount::mount_to_body(app::App);
}
