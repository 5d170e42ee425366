//! Root application component and shared state wiring.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::goals_section::year_goals;
use crate::pages::home::HomePage;
use crate::state::goals::GoalTracker;
use crate::state::theme::{Theme, ThemePreference};
use crate::store::LocalStorageBackend;
use crate::util::theme_dom;

/// Goal tracking as wired on the page: the tracker over browser storage.
pub type PageGoals = GoalTracker<LocalStorageBackend>;

/// Theme preference over browser storage.
pub type PagePrefs = ThemePreference<LocalStorageBackend>;

/// Root component.
///
/// Performs the one-time load-and-reconcile pass for each persisted
/// domain, provides the state objects via context, and renders the page
/// from them. The state lives exactly as long as the page session; there
/// are no module-level singletons.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let goal_ids = year_goals().iter().map(|g| g.id).collect::<Vec<_>>();
    let goals = RwSignal::new(GoalTracker::initialize(LocalStorageBackend, goal_ids));

    let prefs = PagePrefs::new(LocalStorageBackend);
    let initial_theme = prefs.load();
    theme_dom::apply(initial_theme);
    let theme = RwSignal::new(initial_theme);

    provide_context(goals);
    provide_context(prefs);
    provide_context(theme);

    // Visual collaborators. These observe the DOM the page renders; the
    // state wiring above never depends on them.
    #[cfg(feature = "web")]
    {
        Effect::new(move || {
            crate::effects::observe_fade_ins();
        });
        crate::effects::watch_resize_for_fade_ins();
    }

    view! {
        <Stylesheet id="goalpost" href="/style.css"/>
        <Title text="2026 \u{2014} goalpost"/>
        <HomePage/>
    }
}
