//! Form Container Component - titled, closable card shell

use leptos::prelude::*;

use super::assets::CROSS_ICON;
use super::callback::OptionalCallback;

pub const FORM_CONTAINER_CSS: &str = "
.form-container {
    position: relative;
    display: flex;
    flex-flow: column;
    padding: 15px 15px;
    max-width: 385px;
    width: 100%;
    border-radius: 30px;
    background-color: white;
}
.form-container__close {
    cursor: pointer;
    position: absolute;
    top: 20px;
    right: 25px;
}
.form-container__title {
    font-size: 20px;
    margin-bottom: 10px;
    text-align: center;
}
";

/// Which optional parts of the card are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub show_title: bool,
    pub show_close: bool,
}

impl FormLayout {
    pub fn new(title: &str, on_close: &OptionalCallback) -> Self {
        Self {
            show_title: !title.is_empty(),
            show_close: on_close.is_set(),
        }
    }
}

/// Card wrapping arbitrary children.
///
/// The title row is omitted when `title` is empty and the close cross is
/// omitted when no `on_close` handler is given. Style overrides are applied
/// inline so they win over the card's base rules.
#[component]
pub fn FormContainer(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] on_close: OptionalCallback,
    #[prop(optional, into)] container_style: String,
    #[prop(optional, into)] title_style: String,
    children: Children,
) -> impl IntoView {
    let layout = FormLayout::new(&title, &on_close);

    view! {
        <div class="form-container" style=container_style>
            {layout.show_close.then(|| view! {
                <span
                    class="form-container__close"
                    role="button"
                    aria-label="Close"
                    inner_html=CROSS_ICON
                    on:click=move |_| {
                        log::debug!("Form container close activated");
                        on_close.run(());
                    }
                ></span>
            })}
            {layout.show_title.then(|| view! {
                <span class="form-container__title" style=title_style>{title}</span>
            })}
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_layout_defaults_hide_everything() {
        let layout = FormLayout::new("", &OptionalCallback::none());
        assert_eq!(layout, FormLayout { show_title: false, show_close: false });
    }

    #[test]
    fn test_layout_title_iff_non_empty() {
        assert!(FormLayout::new("Swap", &OptionalCallback::none()).show_title);
        assert!(!FormLayout::new("", &OptionalCallback::none()).show_title);
    }

    #[test]
    fn test_layout_close_iff_handler() {
        let on_close = OptionalCallback::new(|_: ()| {});
        let layout = FormLayout::new("", &on_close);
        assert!(layout.show_close);
        assert!(!layout.show_title);
    }

    #[test]
    fn test_render_without_title_or_close() {
        let html = render_html(|| view! { <FormContainer>"body"</FormContainer> });
        assert!(html.contains("body"));
        assert!(!html.contains("form-container__title"));
        assert!(!html.contains("form-container__close"));
    }

    #[test]
    fn test_render_with_title_and_close() {
        let html = render_html(|| {
            view! {
                <FormContainer title="swap" on_close=Callback::new(|_: ()| {})>
                    "body"
                </FormContainer>
            }
        });
        assert!(html.contains("form-container__close"));
        assert!(html.contains("form-container__title"));
        assert!(html.contains(">swap</span>"));
    }

    #[test]
    fn test_title_text_is_not_transformed() {
        assert!(!FORM_CONTAINER_CSS.contains("text-transform"));
    }
}
