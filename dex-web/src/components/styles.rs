//! Component stylesheet
//!
//! Hover and active states cannot be expressed inline, so every component
//! keeps its base rules in a CSS fragment. [`ComponentStyles`] mounts them all
//! once.

use leptos::prelude::*;

use super::account_info::ACCOUNT_INFO_CSS;
use super::button_divider::BUTTON_DIVIDER_CSS;
use super::form_container::FORM_CONTAINER_CSS;
use super::input_token::INPUT_TOKEN_CSS;
use crate::modals::redeem_guide::REDEEM_GUIDE_CSS;
use crate::pages::trade::TRADE_PAGE_CSS;

pub fn stylesheet() -> String {
    [
        FORM_CONTAINER_CSS,
        INPUT_TOKEN_CSS,
        BUTTON_DIVIDER_CSS,
        ACCOUNT_INFO_CSS,
        REDEEM_GUIDE_CSS,
        TRADE_PAGE_CSS,
    ]
    .concat()
}

#[component]
pub fn ComponentStyles() -> impl IntoView {
    view! { <style>{stylesheet()}</style> }
}
