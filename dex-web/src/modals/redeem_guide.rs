//! # Redeem Guide Modal
//!
//! Beta warning dialog shown when the trade screen mounts. It owns its
//! visibility and nothing else: dismissal is not remembered across remounts.
//!
//! ## States
//!
//! ```text
//!        dismiss (close, "Got it", backdrop, Escape)
//!   Open  ──────────────────────────────────────▶  Closed
//!    ▲                                               │
//!    └──────────────── reopen (trigger) ─────────────┘
//! ```

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::assets::CROSS_ICON;

pub const REDEEM_GUIDE_CSS: &str = "
.redeem-guide__backdrop {
    position: fixed;
    inset: 0;
    display: flex;
    justify-content: center;
    align-items: center;
    background: rgba(0, 0, 0, 0.85);
    z-index: 1000;
}
.redeem-guide {
    position: relative;
    width: 90%;
    max-width: 640px;
    border-radius: 6px;
    background: white;
}
.redeem-guide__close {
    cursor: pointer;
    position: absolute;
    top: 18px;
    right: 20px;
}
.redeem-guide__header {
    padding: 20px 24px;
    font-size: 18px;
    font-weight: 700;
    border-bottom: 1px solid rgba(34, 36, 38, 0.15);
}
.redeem-guide__tag {
    margin-left: 12px;
    padding: 3px 10px;
    font-size: 12px;
    color: white;
    background: #db2828;
    border-radius: 0 4px 4px 0;
}
.redeem-guide__content {
    padding: 20px 24px;
}
.redeem-guide__content hr {
    border: none;
    border-top: 1px solid rgba(34, 36, 38, 0.15);
    margin: 14px 0;
}
.redeem-guide__actions {
    display: flex;
    justify-content: flex-end;
    padding: 14px 24px;
    background: #f9fafb;
    border-top: 1px solid rgba(34, 36, 38, 0.15);
}
.redeem-guide__confirm {
    cursor: pointer;
    border: none;
    border-radius: 4px;
    padding: 10px 22px;
    color: white;
    font-weight: 700;
    background: #00b5ad;
}
.redeem-guide__confirm:hover {
    background: #009c95;
}
.redeem-guide__trigger {
    cursor: pointer;
    position: fixed;
    bottom: 20px;
    right: 20px;
    border: none;
    border-radius: 2rem;
    padding: 8px 16px;
    color: white;
    background: #db2828;
}
";

/// Sections of the guide body as (heading, description).
pub const GUIDE_SECTIONS: &[(&str, &str)] = &[
    (
        "Dont forget to open the Zel server",
        "Top right of the Zel wallet, enable server to connect to DAPPS",
    ),
    ("LOW liquidity", "Make sure to trade very small amounts"),
    ("Not responsible for any loss", "This is still in early stage"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideState {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAction {
    /// Close cross, "Got it", a backdrop click or Escape
    Dismiss,
    /// The trigger shown while closed
    Reopen,
}

impl GuideState {
    pub fn is_open(self) -> bool {
        self == GuideState::Open
    }

    /// Next state after `action`. Dismissing a closed guide or reopening an
    /// open one leaves it unchanged.
    pub fn apply(self, action: GuideAction) -> GuideState {
        match action {
            GuideAction::Dismiss => GuideState::Closed,
            GuideAction::Reopen => GuideState::Open,
        }
    }
}

/// Map a `KeyboardEvent.key` value to a guide action.
pub fn action_for_key(key: &str) -> Option<GuideAction> {
    match key {
        "Escape" | "Esc" => Some(GuideAction::Dismiss),
        _ => None,
    }
}

fn apply_action(state: RwSignal<GuideState>, action: GuideAction) {
    state.update(|current| {
        let next = current.apply(action);
        if next != *current {
            log::debug!("Redeem guide {:?} -> {:?}", current, next);
        }
        *current = next;
    });
}

#[component]
pub fn RedeemGuide() -> impl IntoView {
    let state = RwSignal::new(GuideState::default());

    let keydown = window_event_listener(ev::keydown, move |event| {
        if let Some(action) = action_for_key(&event.key()) {
            apply_action(state, action);
        }
    });
    on_cleanup(move || keydown.remove());

    view! { <GuideDialog state=state/> }
}

/// Trigger button while closed, the dialog while open.
#[component]
fn GuideDialog(state: RwSignal<GuideState>) -> impl IntoView {
    let send = move |action: GuideAction| apply_action(state, action);

    view! {
        <Show
            when=move || state.get().is_open()
            fallback=move || view! {
                <button
                    class="redeem-guide__trigger"
                    type="button"
                    on:click=move |_| send(GuideAction::Reopen)
                >
                    "Beta guide"
                </button>
            }
        >
            <div class="redeem-guide__backdrop" on:click=move |_| send(GuideAction::Dismiss)>
                <div
                    class="redeem-guide"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <span
                        class="redeem-guide__close"
                        role="button"
                        aria-label="Close"
                        inner_html=CROSS_ICON
                        on:click=move |_| send(GuideAction::Dismiss)
                    ></span>
                    <div class="redeem-guide__header">
                        <p>
                            "BETA, USE AT YOUR OWN RISK"
                            <span class="redeem-guide__tag">"Warning"</span>
                        </p>
                    </div>
                    <div class="redeem-guide__content">
                        {GUIDE_SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(i, (heading, description))| view! {
                                {(i > 0).then(|| view! { <hr/> })}
                                <h4>{*heading}</h4>
                                <p>{*description}</p>
                            })
                            .collect_view()}
                    </div>
                    <div class="redeem-guide__actions">
                        <button
                            class="redeem-guide__confirm"
                            type="button"
                            on:click=move |_| send(GuideAction::Dismiss)
                        >
                            "Got it"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_starts_open() {
        assert_eq!(GuideState::default(), GuideState::Open);
        assert!(GuideState::default().is_open());
    }

    #[test]
    fn test_dismiss_then_reopen_sequence() {
        let mut trace = vec![GuideState::default()];
        let closed = trace[0].apply(GuideAction::Dismiss);
        trace.push(closed);
        trace.push(closed.apply(GuideAction::Reopen));

        assert_eq!(trace, vec![GuideState::Open, GuideState::Closed, GuideState::Open]);
    }

    #[test]
    fn test_redundant_actions_are_noops() {
        assert_eq!(GuideState::Closed.apply(GuideAction::Dismiss), GuideState::Closed);
        assert_eq!(GuideState::Open.apply(GuideAction::Reopen), GuideState::Open);
    }

    #[test]
    fn test_guide_sections() {
        assert_eq!(GUIDE_SECTIONS.len(), 3);
        assert_eq!(GUIDE_SECTIONS[1].0, "LOW liquidity");
    }

    #[test]
    fn test_escape_dismisses() {
        assert_eq!(action_for_key("Escape"), Some(GuideAction::Dismiss));
        assert_eq!(action_for_key("Esc"), Some(GuideAction::Dismiss));
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key("e"), None);
    }

    #[test]
    fn test_escape_sequence_through_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(GuideState::default());
            if let Some(action) = action_for_key("Escape") {
                apply_action(state, action);
            }
            assert_eq!(state.get_untracked(), GuideState::Closed);

            apply_action(state, GuideAction::Reopen);
            assert_eq!(state.get_untracked(), GuideState::Open);
        });
    }

    #[test]
    fn test_render_open_shows_dialog() {
        let html = render_html(|| {
            let state = RwSignal::new(GuideState::Open);
            view! { <GuideDialog state=state/> }
        });
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("BETA, USE AT YOUR OWN RISK"));
        assert!(html.contains("LOW liquidity"));
        assert!(html.contains("Got it"));
        assert!(!html.contains("redeem-guide__trigger"));
    }

    #[test]
    fn test_render_closed_shows_trigger_only() {
        let html = render_html(|| {
            let state = RwSignal::new(GuideState::Closed);
            view! { <GuideDialog state=state/> }
        });
        assert!(html.contains("redeem-guide__trigger"));
        assert!(html.contains("Beta guide"));
        assert!(!html.contains(r#"role="dialog""#));
    }
}
