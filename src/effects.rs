//! Scroll-reactive visual effects: fade-in on visibility, smooth anchor
//! scrolling, and the window-event plumbing the components share.
//!
//! Everything here consumes DOM queries and produces DOM/style mutations
//! only; it holds no persisted state and the state subsystems never depend
//! on it. Listeners live for the page session, so closures are
//! intentionally leaked with `forget`.

#[cfg(feature = "web")]
use std::cell::RefCell;
#[cfg(feature = "web")]
use std::rc::Rc;

#[cfg(feature = "web")]
use wasm_bindgen::JsCast;
#[cfg(feature = "web")]
use wasm_bindgen::closure::Closure;

/// Fixed navbar height compensated for when scrolling to an anchor.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

/// How far below the top edge a section must reach to count as active.
pub const SECTION_PROBE_PX: f64 = 100.0;

/// Visibility fraction at which a `.fade-in` element is revealed.
pub const FADE_THRESHOLD: f64 = 0.15;

/// Quiet period after the last resize event before fade-ins are rescanned.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Current vertical scroll position, 0 when there is no window.
#[cfg(feature = "web")]
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels, 0 when there is no window.
#[cfg(feature = "web")]
#[must_use]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Attach a page-lifetime listener for `kind` events on the window.
#[cfg(feature = "web")]
pub fn on_window_event(kind: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a window listener for `kind` that waits for `delay_ms` of quiet
/// before running `handler`, coalescing event bursts into one call.
#[cfg(feature = "web")]
pub fn on_window_event_debounced(kind: &str, delay_ms: u32, handler: impl Fn() + Clone + 'static) {
    use gloo_timers::callback::Timeout;

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    on_window_event(kind, move || {
        // Dropping a pending timeout clears it.
        drop(pending.borrow_mut().take());
        let handler = handler.clone();
        let slot = Rc::clone(&pending);
        let timeout = Timeout::new(delay_ms, move || {
            slot.borrow_mut().take();
            handler();
        });
        *pending.borrow_mut() = Some(timeout);
    });
}

/// Smooth-scroll the window to the element with id `fragment`, stopping
/// short of the fixed navbar. Missing targets are ignored.
#[cfg(feature = "web")]
pub fn smooth_scroll_to(fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|d| d.get_element_by_id(fragment))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let top = (f64::from(target.offset_top()) - NAVBAR_OFFSET_PX).max(0.0);
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// The id of the section currently under the probe line, if any.
#[cfg(feature = "web")]
#[must_use]
pub fn active_section() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let sections = document.query_selector_all("section[id]").ok()?;
    let probe = scroll_y() + SECTION_PROBE_PX;

    let mut active = None;
    for i in 0..sections.length() {
        let Some(section) = sections
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let top = f64::from(section.offset_top());
        let height = f64::from(section.offset_height());
        if probe >= top && probe < top + height {
            active = Some(section.id());
        }
    }
    active
}

/// Reveal `.fade-in` elements as they enter the viewport: each element
/// gains `visible` on first intersection and is then unobserved.
#[cfg(feature = "web")]
pub fn observe_fade_ins() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".fade-in:not(.visible)") else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(FADE_THRESHOLD));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
    callback.forget();
}

/// Rescan for fade-in elements after the window settles from a resize.
#[cfg(feature = "web")]
pub fn watch_resize_for_fade_ins() {
    on_window_event_debounced("resize", RESIZE_DEBOUNCE_MS, observe_fade_ins);
}
