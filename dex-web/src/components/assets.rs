//! Fixed vector glyphs embedded as SVG markup.

/// Close cross used by the form card.
pub const CROSS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 14 14" fill="none"><path d="M1 1L13 13M13 1L1 13" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;

/// Dropdown indicator shown on every token pill.
pub const ARROW_DOWN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="8" viewBox="0 0 12 8" fill="none"><path d="M1 1.5L6 6.5L11 1.5" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Up/down arrows for the swap-direction button.
pub const SWAP_ARROWS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16" fill="none"><path d="M5 2V14M5 14L2 11M5 14L8 11M11 14V2M11 2L8 5M11 2L14 5" stroke="white" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
