//! Aggregate progress header: completed count, total, percentage, fill bar.

use leptos::prelude::*;

use crate::app::PageGoals;

/// Progress indicator above the goal grid. Every display target re-derives
/// from the tracker after each toggle.
#[component]
pub fn GoalProgress() -> impl IntoView {
    let goals = expect_context::<RwSignal<PageGoals>>();
    let summary = move || goals.with(|g| g.progress());

    view! {
        <div class="goal-progress">
            <p class="goal-progress__count">
                <span id="completed-count">{move || summary().completed}</span>
                " of "
                <span id="total-count">{move || summary().total}</span>
                " done"
            </p>
            <div class="goal-progress__bar" role="presentation">
                <div
                    id="progress-fill"
                    class="goal-progress__fill"
                    style:width=move || format!("{}%", summary().percentage)
                ></div>
            </div>
            <span id="progress-percentage" class="goal-progress__percentage">
                {move || format!("{}%", summary().percentage)}
            </span>
        </div>
    }
}
