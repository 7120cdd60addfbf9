//! Account Info Component - clickable balance/account row for the header

use leptos::prelude::*;

use super::callback::OptionalCallback;

pub const ACCOUNT_INFO_CSS: &str = "
.account-info {
    display: flex;
    gap: 10px;
}
.account-info:hover {
    opacity: 0.7;
    cursor: pointer;
}
";

/// Shows `balance` and `account` exactly as given. The whole row is the
/// click target.
#[component]
pub fn AccountInfo(
    #[prop(into)] balance: String,
    #[prop(into)] account: String,
    #[prop(optional, into)] on_click: OptionalCallback,
) -> impl IntoView {
    view! {
        <div class="account-info" on:click=move |_| { on_click.run(()); }>
            <div class="balance-container">{balance}</div>
            <div class="account-container">{account}</div>
        </div>
    }
}
