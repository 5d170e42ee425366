//! The goals section: catalog, progress header, and the card grid.

use leptos::prelude::*;

use crate::components::goal_card::GoalCard;
use crate::components::goal_progress::GoalProgress;
use crate::state::goals::Goal;

/// The year's checklist. Fixed page content: ids are stable for the life
/// of the page and double as the persistence keys.
#[must_use]
pub fn year_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "ship-side-project",
            title: "Ship a side project",
            detail: "Take one idea all the way from sketch to something other people can use.",
            icon: "\u{1F680}",
        },
        Goal {
            id: "read-twelve-books",
            title: "Read twelve books",
            detail: "One a month, and at least three of them outside the usual genres.",
            icon: "\u{1F4DA}",
        },
        Goal {
            id: "run-a-10k",
            title: "Run a 10k",
            detail: "Train up from couch pace and finish an organized race.",
            icon: "\u{1F3C3}",
        },
        Goal {
            id: "learn-rust",
            title: "Learn Rust properly",
            detail: "Past the borrow checker and into writing something real with it.",
            icon: "\u{1F980}",
        },
        Goal {
            id: "weekly-sketch",
            title: "Sketch every week",
            detail: "Fifty-two pages in the sketchbook by December, good or bad.",
            icon: "\u{270F}\u{FE0F}",
        },
        Goal {
            id: "visit-somewhere-new",
            title: "Visit somewhere new",
            detail: "At least one city or trail that is not already on the map of habits.",
            icon: "\u{2708}\u{FE0F}",
        },
    ]
}

/// Goals section wrapper.
#[component]
pub fn GoalsSection() -> impl IntoView {
    view! {
        <section id="goals" class="goals-section">
            <h2 class="section-heading fade-in">"Goals for the year"</h2>
            <GoalProgress/>
            <div class="goals-section__grid">
                {year_goals()
                    .into_iter()
                    .map(|goal| view! { <GoalCard goal=goal/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
