//! Hero banner with a parallax background and a scroll-down indicator.

use leptos::prelude::*;

/// Background scroll rate relative to the page.
#[cfg(feature = "web")]
const PARALLAX_RATE: f64 = 0.3;

/// Scroll depth past which the indicator fades out.
#[cfg(feature = "web")]
const INDICATOR_HIDE_AT_PX: f64 = 100.0;

#[component]
pub fn Hero() -> impl IntoView {
    let background: NodeRef<leptos::html::Div> = NodeRef::new();
    let indicator_hidden = RwSignal::new(false);

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
                let y = effects::scroll_y();
                indicator_hidden.set(y > INDICATOR_HIDE_AT_PX);

                // Only shift the background while the hero can still be
                // on screen.
                if y < effects::viewport_height() {
                    if let Some(el) = background.get_untracked() {
                        let offset = y * PARALLAX_RATE;
                        let _ = el
                            .style()
                            .set_property("transform", &format!("translateY({offset}px)"));
                    }
                }
                gate.borrow_mut().finish();
            });
        });
    }

    view! {
        <header id="top" class="hero">
            <div class="hero-background" node_ref=background></div>
            <div class="hero-content fade-in">
                <p class="hero-kicker">"Welcome to"</p>
                <h1 class="hero-title">"2026"</h1>
                <p class="hero-subtitle">"A year of small, steady wins."</p>
            </div>
            <div class="scroll-indicator" class:hidden=indicator_hidden>
                <span class="scroll-indicator__arrow">"\u{2193}"</span>
            </div>
        </header>
    }
}
