//! Decorative background: grid, drifting nodes, blurred orbs, pulsing
//! connection lines, terminal/hash text and bobbing glyphs.
//!
//! Geometry comes from `linktree_core::motion`; motion is CSS-only and has no
//! effect on application state.

use dioxus::prelude::*;
use linktree_core::motion::{
    self, ConnectionLine, FloatingGlyph, FloatingNode, Orb, HASH_LINES, TERMINAL_LINES,
};
use linktree_ui::Glyph;

fn node_style(node: &FloatingNode) -> String {
    format!(
        "width: {s}px; height: {s}px; left: {}%; top: {}%; --period: {}s;",
        node.left_pct,
        node.top_pct,
        node.period_secs,
        s = node.size_px,
    )
}

fn orb_style(orb: &Orb) -> String {
    format!(
        "animation: {} {}s ease-in-out infinite alternate;",
        orb.animation_name(),
        orb.period_secs
    )
}

fn line_style(line: &ConnectionLine) -> String {
    format!(
        "width: {w0}px; --w0: {w0}px; --w1: {}px; transform: rotate({}deg); left: {}%; top: {}%; --period: {}s;",
        line.peak_width_px,
        line.rotate_deg,
        line.left_pct,
        line.top_pct,
        line.period_secs,
        w0 = line.width_px,
    )
}

fn glyph_style(glyph: &FloatingGlyph) -> String {
    format!(
        "left: {}%; top: {}%; --period: {}s;",
        glyph.left_pct, glyph.top_pct, glyph.period_secs
    )
}

#[component]
pub fn Backdrop() -> Element {
    let nodes: Vec<(String, String)> = motion::floating_nodes()
        .iter()
        .map(|n| (format!("node {}", n.palette.class()), node_style(n)))
        .collect();
    let lines: Vec<String> = motion::connection_lines().iter().map(line_style).collect();
    let glyphs: Vec<(String, FloatingGlyph)> = motion::floating_glyphs()
        .into_iter()
        .map(|g| (glyph_style(&g), g))
        .collect();
    let orbs: Vec<(&str, String)> = motion::orbs()
        .iter()
        .map(|o| (o.class, orb_style(o)))
        .collect();
    let terminal: Vec<(&str, &str)> = TERMINAL_LINES
        .iter()
        .map(|(text, ok)| (*text, if *ok { "ok" } else { "" }))
        .collect();

    rsx! {
        div { class: "backdrop", "aria-hidden": "true",
            div { class: "backdrop-wash" }

            svg { class: "backdrop-grid", xmlns: "http://www.w3.org/2000/svg",
                defs {
                    pattern {
                        id: "grid",
                        width: "50",
                        height: "50",
                        "patternUnits": "userSpaceOnUse",
                        path {
                            d: "M 50 0 L 0 0 0 50",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "0.5",
                        }
                    }
                }
                rect { width: "100%", height: "100%", fill: "url(#grid)" }
            }

            for (i, (class, style)) in nodes.into_iter().enumerate() {
                div { key: "node-{i}", class: "{class}", style: "{style}" }
            }

            for (class, style) in orbs {
                div { key: "{class}", class: "{class}", style: "{style}" }
            }

            for (i, style) in lines.into_iter().enumerate() {
                div { key: "line-{i}", class: "connection-line", style: "{style}" }
            }

            div { class: "terminal-decor",
                div { class: "rise-in",
                    for (text, class) in terminal {
                        div { class: "{class}", "{text}" }
                    }
                }
            }

            div { class: "hash-decor",
                div { class: "fall-in",
                    for text in HASH_LINES {
                        div { "{text}" }
                    }
                }
            }

            for (i, (style, glyph)) in glyphs.into_iter().enumerate() {
                div { key: "icon-{i}", class: "floating-glyph", style: "{style}",
                    Glyph { icon: glyph.icon, size: glyph.size_px }
                }
            }
        }
    }
}
