//! Button Divider Component - two rules flanking a round action button

use leptos::prelude::*;

use super::callback::OptionalCallback;
use crate::config::Theme;

pub const BUTTON_DIVIDER_CSS: &str = "
.button-divider {
    display: flex;
    justify-content: center;
    align-items: center;
    flex-wrap: nowrap;
    margin: 15px 0px;
}
.button-divider__button {
    cursor: pointer;
    display: flex;
    justify-content: center;
    align-items: center;
    border: none;
    border-radius: 100%;
    width: 32px;
    height: 32px;
    padding: 0;
    margin: 0;
    background: #c56cf0;
    transition: all .1s ease-in-out;
}
.button-divider__button:hover {
    background-color: #9b59b6;
    transform: scale(1.1);
}
.button-divider__button:active {
    background-color: #8e44ad;
}
.button-divider__track {
    width: 86.5px;
    height: 1px;
}
";

/// Inline style colouring a rule with the theme's border colour.
pub fn track_style(theme: &Theme) -> String {
    format!("background-color: {};", theme.border_color)
}

/// Decorative separator. Only the round button reacts to clicks.
#[component]
pub fn ButtonDivider(
    #[prop(into)] icon: ViewFn,
    #[prop(optional, into)] container_style: String,
    #[prop(optional, into)] button_style: String,
    #[prop(optional, into)] on_click: OptionalCallback,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let track = track_style(&theme);

    view! {
        <div class="button-divider" style=container_style>
            <div class="button-divider__track" aria-hidden="true" style=track.clone()></div>
            <button
                class="button-divider__button"
                type="button"
                style=button_style
                on:click=move |_| {
                    on_click.run(());
                }
            >
                {icon.run()}
            </button>
            <div class="button-divider__track" aria-hidden="true" style=track></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_track_style_follows_theme() {
        let theme = Theme {
            border_color: "#123456".to_string(),
            ..Theme::default()
        };
        assert_eq!(track_style(&theme), "background-color: #123456;");
    }

    #[test]
    fn test_render_one_button_between_two_tracks() {
        let html = render_html(|| {
            view! { <ButtonDivider icon=|| view! { <i class="swap-glyph"></i> }/> }
        });
        assert_eq!(html.matches("button-divider__track").count(), 2);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains(r#"<i class="swap-glyph"></i>"#));

        let button_at = html.find("<button").unwrap_or_default();
        let first_track = html.find("button-divider__track").unwrap_or_default();
        let last_track = html.rfind("button-divider__track").unwrap_or_default();
        assert!(first_track < button_at && button_at < last_track);
    }

    #[test]
    fn test_render_tracks_use_theme_colour() {
        let theme = Theme {
            border_color: "#abcdef".to_string(),
            ..Theme::default()
        };
        let html = render_html(move || view! { <ButtonDivider icon=|| () theme=theme/> });
        assert_eq!(html.matches("background-color: #abcdef;").count(), 2);
    }

    #[test]
    fn test_track_rules_have_no_pointer() {
        let track_rules = BUTTON_DIVIDER_CSS
            .split(".button-divider__track")
            .nth(1)
            .unwrap_or_default();
        assert!(!track_rules.contains("cursor"));
    }
}
