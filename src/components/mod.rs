//! Page-level components for the link tree.
//!
//! Reusable pieces (glyphs, link cards, the theme toggle) live in
//! `linktree-ui`; these are specific to this page.

mod backdrop;
mod profile_card;
mod site_head;

pub use backdrop::Backdrop;
pub use profile_card::{PageFooter, ProfileCard};
pub use site_head::SiteHead;
