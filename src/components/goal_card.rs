//! One goal card with its completion checkbox.

use leptos::prelude::*;

use crate::app::PageGoals;
use crate::state::goals::Goal;

/// Duration of the cosmetic pulse when a goal transitions to completed.
#[cfg(feature = "web")]
const PULSE_MS: u32 = 200;

/// A checklist card. The `completed` class derives from the tracker, so
/// the card always shows the in-memory truth, persisted or not.
#[component]
pub fn GoalCard(goal: Goal) -> impl IntoView {
    let goals = expect_context::<RwSignal<PageGoals>>();
    let pulsing = RwSignal::new(false);

    let id = goal.id;
    let completed = move || goals.with(|g| g.is_done(id));

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let mut now = None;
        goals.update(|g| now = g.toggle(id));

        // Cosmetic pulse on the transition into completed only.
        #[cfg(feature = "web")]
        if now == Some(true) {
            pulsing.set(true);
            gloo_timers::callback::Timeout::new(PULSE_MS, move || pulsing.set(false)).forget();
        }
        #[cfg(not(feature = "web"))]
        let _ = now;
    };

    view! {
        <article
            class="goal-card fade-in"
            class:completed=completed
            class=("goal-card--pulse", move || pulsing.get())
            data-goal-id=goal.id
        >
            <span class="goal-card__icon" aria-hidden="true">{goal.icon}</span>
            <div class="goal-card__body">
                <h3 class="goal-card__title">{goal.title}</h3>
                <p class="goal-card__detail">{goal.detail}</p>
            </div>
            <button
                class="goal-checkbox"
                aria-pressed=move || completed().to_string()
                title="Toggle goal"
                on:click=on_toggle
            >
                <span class="goal-checkbox__mark">"\u{2713}"</span>
            </button>
        </article>
    }
}
