//! Zel DEX Web App - Leptos Frontend
//!
//! Composition root: loads configuration once and passes it down.

use leptos::prelude::*;

use crate::components::ComponentStyles;
use crate::config::AppConfig;
use crate::pages::TradePage;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::debug!("Using configuration: {:?}", config);

    view! {
        <ComponentStyles/>
        <div class="app-container">
            <TradePage config=config/>
        </div>
    }
}
