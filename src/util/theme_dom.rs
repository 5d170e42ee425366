//! Theme presentation reconciliation.
//!
//! Applies the resolved [`Theme`] as a `light-theme` class on `<body>` and
//! reads the applied theme back for the DOM-wins toggle rule. Requires a
//! browser environment; elsewhere `apply` is a no-op and `applied` reports
//! nothing, so callers fall back to their in-memory value.

use crate::state::theme::Theme;

/// Class present on `<body>` while the light theme is applied.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Set or remove the theme class to match `theme`. Tolerates a missing
/// document or body silently.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = match theme {
                Theme::Light => classes.add_1(LIGHT_THEME_CLASS),
                Theme::Dark => classes.remove_1(LIGHT_THEME_CLASS),
            };
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// The theme currently applied to the page, or `None` when there is no
/// document to inspect.
#[must_use]
pub fn applied() -> Option<Theme> {
    #[cfg(feature = "web")]
    {
        let body = web_sys::window()?.document()?.body()?;
        if body.class_list().contains(LIGHT_THEME_CLASS) {
            Some(Theme::Light)
        } else {
            Some(Theme::Dark)
        }
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}
