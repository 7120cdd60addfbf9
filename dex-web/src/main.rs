//! Zel DEX web components
//!
//! Presentational building blocks for the trade screens (form card, token
//! pill, button divider, account row, beta guide) and the swap page that
//! composes them.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod modals;
pub mod pages;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Zel DEX web starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
