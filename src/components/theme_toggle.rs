//! Theme toggle button.

use leptos::prelude::*;

use crate::app::PagePrefs;
use crate::state::theme::Theme;
use crate::util::theme_dom;

/// Light/dark switch. The toggle direction is decided by the theme the
/// page currently shows; storage follows the applied state, so the two
/// cannot drift apart from the user's point of view.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let prefs = expect_context::<PagePrefs>();

    let on_toggle = move |_| {
        let applied = theme_dom::applied().unwrap_or_else(|| theme.get_untracked());
        let next = prefs.toggle_from(applied);
        theme_dom::apply(next);
        theme.set(next);
    };

    let indicator = move || match theme.get() {
        Theme::Light => "\u{2600}\u{FE0F}",
        Theme::Dark => "\u{1F319}",
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title="Toggle light/dark theme"
            on:click=on_toggle
        >
            {indicator}
        </button>
    }
}
