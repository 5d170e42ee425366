//! Leptos view components for the page.

pub mod goal_card;
pub mod goal_progress;
pub mod goals_section;
pub mod hero;
pub mod navbar;
pub mod theme_toggle;
