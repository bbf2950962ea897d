//! Glyph Component
//!
//! Line icons drawn on a 24×24 grid with round caps and joins, stroked in
//! `currentColor` so they inherit the surrounding text color.

use dioxus::prelude::*;
use linktree_core::IconTag;

/// SVG path data for each glyph.
pub fn glyph_paths(icon: IconTag) -> &'static [&'static str] {
    match icon {
        IconTag::Globe => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        IconTag::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        IconTag::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M2 4a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
        ],
        IconTag::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        IconTag::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        IconTag::MessageSquare => {
            &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"]
        }
        IconTag::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        IconTag::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        IconTag::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        IconTag::Sun => &[
            "M8 12a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        IconTag::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        IconTag::Hash => &["M4 9h16", "M4 15h16", "M10 3 8 21", "M16 3l-2 18"],
        IconTag::Database => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0 -18 0",
            "M3 5V19A9 3 0 0 0 21 19V5",
            "M3 12A9 3 0 0 0 21 12",
        ],
    }
}

/// Properties for the Glyph component
#[derive(Clone, PartialEq, Props)]
pub struct GlyphProps {
    pub icon: IconTag,
    /// Rendered width and height in px
    #[props(default = 20)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Inline SVG line icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Glyph { icon: IconTag::Github, size: 20 }
/// }
/// ```
#[component]
pub fn Glyph(props: GlyphProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) => format!("glyph glyph-{} {}", props.icon.name(), extra),
        None => format!("glyph glyph-{}", props.icon.name()),
    };

    rsx! {
        svg {
            class: "{class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph_paths(props.icon).iter() {
                path { d: "{d}" }
            }
        }
    }
}
