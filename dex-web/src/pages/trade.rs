//! Trade Page - composition root for the swap form
//!
//! Owns the screen state (selected pair, typed amounts) and hands data and
//! callbacks down to the stateless components. The theme arrives through
//! [`AppConfig`] and is passed explicitly to every component that reads it.

use leptos::prelude::*;

use crate::components::assets::SWAP_ARROWS_ICON;
use crate::components::{AccountInfo, ButtonDivider, FormContainer, InputToken};
use crate::config::{AppConfig, Theme};
use crate::modals::RedeemGuide;
use crate::utils::constants::{TokenListing, DEMO_ACCOUNT, DEMO_BALANCE, NATIVE_TOKEN, TOKENS};
use crate::utils::format::account_summary;

pub const TRADE_PAGE_CSS: &str = "
.trade-page {
    display: flex;
    flex-direction: column;
    align-items: center;
    min-height: 100vh;
    background: #f2f2f2;
}
.trade-page__header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    width: 100%;
    max-width: 1200px;
    padding: 20px 24px;
    box-sizing: border-box;
}
.trade-page__brand {
    font-size: 22px;
    font-weight: 700;
}
.trade-page__row {
    display: flex;
    flex-direction: column;
    gap: 6px;
}
.trade-page__field {
    position: relative;
}
.trade-page__input {
    width: 100%;
    box-sizing: border-box;
    padding: 22px 16px;
    font-size: 18px;
    border: 1px solid #dadada;
    border-radius: 20px;
}
.trade-page__swap-icon {
    display: flex;
}
.token-badge {
    display: inline-flex;
    justify-content: center;
    align-items: center;
    width: 22px;
    height: 22px;
    border-radius: 50%;
    font-size: 12px;
    color: white;
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// Indices into [`TOKENS`] for both sides of the swap. The two sides never
/// point at the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSelection {
    pub from: usize,
    pub to: usize,
}

impl Default for PairSelection {
    fn default() -> Self {
        Self { from: 0, to: 1 }
    }
}

impl PairSelection {
    pub fn index(self, side: Side) -> usize {
        match side {
            Side::From => self.from,
            Side::To => self.to,
        }
    }

    pub fn listing(self, side: Side) -> TokenListing {
        TOKENS[self.index(side)]
    }

    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Advance one side to the next token not held by the other side.
    pub fn cycle(self, side: Side, len: usize) -> Self {
        match side {
            Side::From => Self {
                from: next_token(self.from, self.to, len),
                ..self
            },
            Side::To => Self {
                to: next_token(self.to, self.from, len),
                ..self
            },
        }
    }
}

/// Next index after `current`, wrapping around and skipping `taken`.
pub fn next_token(current: usize, taken: usize, len: usize) -> usize {
    if len < 2 {
        return current;
    }
    let mut next = (current + 1) % len;
    if next == taken {
        next = (next + 1) % len;
    }
    next
}

#[component]
fn TokenBadge(listing: TokenListing) -> impl IntoView {
    view! {
        <span class="token-badge" style=format!("background: {};", listing.color)>
            {listing.code.get(..1).unwrap_or_default()}
        </span>
    }
}

#[component]
fn TokenRow(
    label: &'static str,
    side: Side,
    amount: RwSignal<String>,
    pair: RwSignal<PairSelection>,
    theme: Theme,
) -> impl IntoView {
    view! {
        <div class="trade-page__row">
            <label class="trade-page__label">{label}</label>
            <div class="trade-page__field">
                <input
                    class="trade-page__input"
                    type="number"
                    min="0"
                    placeholder="0.0"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                {move || {
                    let listing = pair.get().listing(side);
                    view! {
                        <InputToken
                            code=listing.code
                            icon=move || view! { <TokenBadge listing=listing/> }
                            theme=theme.clone()
                            on_click=Callback::new(move |_: ()| {
                                pair.update(|p| *p = p.cycle(side, TOKENS.len()));
                                log::debug!("{:?} token -> {}", side, pair.get_untracked().listing(side).code);
                            })
                        />
                    }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn TradePage(config: AppConfig) -> impl IntoView {
    let AppConfig {
        theme,
        balance_precision,
    } = config;

    let pair = RwSignal::new(PairSelection::default());
    let from_amount = RwSignal::new(String::new());
    let to_amount = RwSignal::new(String::new());

    let summary = account_summary(DEMO_BALANCE, NATIVE_TOKEN, DEMO_ACCOUNT, balance_precision);

    let reset = Callback::new(move |_: ()| {
        from_amount.set(String::new());
        to_amount.set(String::new());
        pair.set(PairSelection::default());
        log::info!("Swap form reset");
    });

    let flip = Callback::new(move |_: ()| {
        pair.update(|p| *p = p.swapped());
        let previous_from = from_amount.get_untracked();
        from_amount.set(to_amount.get_untracked());
        to_amount.set(previous_from);
    });

    let from_theme = theme.clone();
    let to_theme = theme.clone();

    view! {
        <div class="trade-page">
            <header class="trade-page__header">
                <span class="trade-page__brand">"Zel DEX"</span>
                <AccountInfo
                    balance=summary.balance
                    account=summary.account
                    on_click=Callback::new(|_: ()| log::info!("Account details requested"))
                />
            </header>
            <FormContainer title="Swap" on_close=reset>
                <TokenRow label="From" side=Side::From amount=from_amount pair=pair theme=from_theme/>
                <ButtonDivider
                    icon=|| view! { <span class="trade-page__swap-icon" inner_html=SWAP_ARROWS_ICON></span> }
                    theme=theme
                    on_click=flip
                />
                <TokenRow label="To" side=Side::To amount=to_amount pair=pair theme=to_theme/>
            </FormContainer>
            <RedeemGuide/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_distinct() {
        let pair = PairSelection::default();
        assert_ne!(pair.from, pair.to);
        assert_eq!(pair.listing(Side::From).code, "ZEL");
    }

    #[test]
    fn test_next_token_skips_taken() {
        assert_eq!(next_token(0, 1, 4), 2);
        assert_eq!(next_token(3, 0, 4), 1);
        assert_eq!(next_token(2, 0, 4), 3);
    }

    #[test]
    fn test_next_token_small_lists() {
        assert_eq!(next_token(0, 1, 2), 0);
        assert_eq!(next_token(0, 0, 1), 0);
        assert_eq!(next_token(0, 0, 0), 0);
    }

    #[test]
    fn test_cycle_never_collides() {
        let mut pair = PairSelection::default();
        for _ in 0..10 {
            pair = pair.cycle(Side::From, TOKENS.len());
            assert_ne!(pair.from, pair.to);
            pair = pair.cycle(Side::To, TOKENS.len());
            assert_ne!(pair.from, pair.to);
        }
    }

    #[test]
    fn test_swapped() {
        let pair = PairSelection { from: 2, to: 3 };
        assert_eq!(pair.swapped(), PairSelection { from: 3, to: 2 });
        assert_eq!(pair.swapped().swapped(), pair);
    }
}
