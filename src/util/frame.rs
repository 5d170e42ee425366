//! Animation-frame coalescing for scroll-driven visual updates.
//!
//! Scroll events arrive much faster than frames are painted. `FrameGate`
//! lets a listener schedule at most one update per frame tick: the first
//! request between paints wins and the rest are dropped until the frame
//! callback re-arms the gate.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// One-per-frame admission gate.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once per tick; the caller that gets `true`
    /// schedules the frame callback.
    pub fn try_begin(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Re-arm the gate. Called from the frame callback after the update.
    pub fn finish(&mut self) {
        self.ticking = false;
    }
}

/// Run `f` on the next animation frame. No-op without a window.
#[cfg(feature = "web")]
pub fn request_frame(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if let Some(window) = web_sys::window() {
        let callback = Closure::once_into_js(f);
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }
}
