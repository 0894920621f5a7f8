/// Cookie Menu - popup of a cookie manager browser extension
/// Built with Rust + WASM + Yew

mod bridge;
pub mod controller;
pub mod cookie_filter;
pub mod cookies;
pub mod error;
pub mod host;
pub mod i18n;
pub mod settings;
pub mod tab_context;
pub mod ui;
pub mod version;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
