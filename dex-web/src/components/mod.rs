//! UI Components

pub mod account_info;
pub mod assets;
pub mod button_divider;
pub mod callback;
pub mod form_container;
pub mod input_token;
pub mod styles;

pub use account_info::AccountInfo;
pub use button_divider::ButtonDivider;
pub use callback::OptionalCallback;
pub use form_container::FormContainer;
pub use input_token::InputToken;
pub use styles::ComponentStyles;

/// Render a view to markup inside a throwaway reactive owner.
#[cfg(test)]
pub(crate) fn render_html<V>(view: impl FnOnce() -> V) -> String
where
    V: leptos::tachys::view::RenderHtml,
{
    leptos::prelude::Owner::new().with(|| view().to_html())
}
