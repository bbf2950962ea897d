//! Reusable link-tree components

mod button;
mod glyph;
mod link_card;
mod theme_toggle;

pub use button::*;
pub use glyph::*;
pub use link_card::*;
pub use theme_toggle::*;
