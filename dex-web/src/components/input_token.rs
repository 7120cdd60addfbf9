//! Input Token Component - clickable token pill inside an amount field

use leptos::prelude::*;

use super::assets::ARROW_DOWN_ICON;
use super::callback::OptionalCallback;
use crate::config::Theme;

pub const INPUT_TOKEN_CSS: &str = "
.input-token {
    cursor: pointer;
    position: absolute;
    display: flex;
    justify-content: space-between;
    align-items: center;
    top: 19%;
    right: 10px;
    max-height: 22px;
    padding: 15px !important;
    border-radius: 2rem;
    background: #e6e6e6;
    gap: 5px;
}
.input-token:hover {
    background: #d6d6d6;
}
.input-token:active {
    background: #b1b1b1;
}
.input-token > .input-token__icon:first-child {
    margin-right: 8px;
}
.input-token__code {
    font-size: 16px;
}
";

/// Inline style carrying the theme-dependent width.
pub fn input_token_style(theme: &Theme) -> String {
    format!("min-width: {};", theme.input_token_min_width())
}

/// Token pill: icon, ticker code and a dropdown arrow.
///
/// Holds no state. Without `icon` the icon slot is left out entirely;
/// without `on_click` the pill still renders but clicks do nothing.
#[component]
pub fn InputToken(
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional, into)] code: String,
    #[prop(optional, into)] on_click: OptionalCallback,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    view! {
        <div
            class="input-token"
            style=input_token_style(&theme)
            on:click=move |_| {
                if !on_click.run(()) {
                    log::trace!("Token pill clicked without a handler");
                }
            }
        >
            {icon.map(|icon| view! { <span class="input-token__icon">{icon.run()}</span> })}
            <span class="input-token__code">{code}</span>
            <span class="input-token__arrow" inner_html=ARROW_DOWN_ICON></span>
        </div>
    }
}
