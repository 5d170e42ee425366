//! Persisted page state, split by domain.
//!
//! DESIGN
//! ======
//! Each domain (`goals`, `theme`) owns a plain model struct plus the small
//! controller that sequences load → reconcile → toggle → persist against a
//! [`crate::store::StorageBackend`]. The in-memory model is the single
//! source of truth; the rendered page derives from it and is never read
//! back. Keeping the controllers free of browser types lets every state
//! transition run under native `cargo test`.

pub mod goals;
pub mod theme;
