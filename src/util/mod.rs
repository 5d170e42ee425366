//! Browser glue kept out of the state modules.

pub mod frame;
pub mod theme_dom;
