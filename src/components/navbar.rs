//! Sticky navbar: scrolled styling, active-section highlight, mobile menu,
//! and smooth anchor scrolling.
//!
//! All classes derive from signals; the scroll listener only writes the
//! signals, and it does so at most once per animation frame through a
//! [`crate::util::frame::FrameGate`].

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Anchor targets shown in the menu, in page order.
const SECTIONS: [(&str, &str); 3] =
    [("about", "About"), ("goals", "Goals"), ("contact", "Contact")];

/// Scroll depth at which the navbar switches to its condensed style.
#[cfg(feature = "web")]
const SCROLLED_AT_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let active = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "web")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::effects;
        use crate::util::frame::{self, FrameGate};

        let gate = Rc::new(RefCell::new(FrameGate::new()));
        effects::on_window_event("scroll", move || {
            if !gate.borrow_mut().try_begin() {
                return;
            }
            let gate = Rc::clone(&gate);
            frame::request_frame(move || {
                scrolled.set(effects::scroll_y() > SCROLLED_AT_PX);
                if let Some(section) = effects::active_section() {
                    if active.with_untracked(|current| *current != section) {
                        active.set(section);
                    }
                }
                gate.borrow_mut().finish();
            });
        });
    }

    let nav_link = move |(id, label): (&'static str, &'static str)| {
        let on_click = move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            menu_open.set(false);
            #[cfg(feature = "web")]
            crate::effects::smooth_scroll_to(id);
        };
        view! {
            <a
                href=format!("#{id}")
                class="navbar-link"
                class:active=move || active.with(|current| current == id)
                on:click=on_click
            >
                {label}
            </a>
        }
    };

    view! {
        <nav id="navbar" class="navbar" class:scrolled=scrolled>
            <a class="navbar-brand" href="#top">"goalpost"</a>
            <button
                id="navbar-toggle"
                class="navbar-toggle"
                class:active=menu_open
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span class="navbar-toggle__bar"></span>
                <span class="navbar-toggle__bar"></span>
                <span class="navbar-toggle__bar"></span>
            </button>
            <div id="navbar-menu" class="navbar-menu" class:active=menu_open>
                {SECTIONS.into_iter().map(nav_link).collect::<Vec<_>>()}
                <ThemeToggle/>
            </div>
        </nav>
    }
}
