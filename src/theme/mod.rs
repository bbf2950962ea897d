//! Stylesheets and palettes for the desktop page.

pub mod colors;
pub mod styles;

pub use colors::palette_css;
pub use styles::{motion_styles, GLOBAL_STYLES};
