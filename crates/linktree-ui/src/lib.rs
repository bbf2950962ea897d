//! Link Tree UI Components
//!
//! Dioxus components for the link-tree page. Styling lives in the app's
//! global stylesheet; components only emit classes and the few inline
//! values (gradients, delays) that vary per item.
//!
//! ## Theming
//!
//! Components never read the theme flag directly. The root surface carries
//! a `light` or `dark` class and the stylesheet branches on it.

pub mod components;

pub use components::*;
