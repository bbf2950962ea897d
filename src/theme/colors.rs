//! Light and dark palettes.
//!
//! Slate-gray surfaces with teal/emerald highlights. Each palette is emitted
//! as CSS custom properties scoped to the root surface's theme class, so
//! flipping the class repaints the page without re-rendering components.

use linktree_core::Theme;

/// One branch of the color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    /// Tint at the bottom-right corner of the backdrop wash.
    pub wash: &'static str,
    pub surface: &'static str,
    pub surface_border: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub badge_bg: &'static str,
    pub ring: &'static str,
    pub grid_line: &'static str,
    pub terminal_ok: &'static str,
    pub decor_opacity: &'static str,
    pub orb_purple: (&'static str, &'static str),
    pub orb_blue: (&'static str, &'static str),
    pub node_teal: (&'static str, &'static str),
    pub node_purple: (&'static str, &'static str),
    pub line: (&'static str, &'static str),
    pub glyph: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f9fafb",
    wash: "#f0fdfa",
    surface: "rgba(255, 255, 255, 0.7)",
    surface_border: "#e5e7eb",
    text_primary: "#1f2937",
    text_secondary: "#4b5563",
    text_muted: "#6b7280",
    badge_bg: "#f3f4f6",
    ring: "rgba(20, 184, 166, 0.5)",
    grid_line: "#6b7280",
    terminal_ok: "#16a34a",
    decor_opacity: "0.05",
    orb_purple: ("#d8b4fe", "#f9a8d4"),
    orb_blue: ("#93c5fd", "#5eead4"),
    node_teal: ("#2dd4bf", "#3b82f6"),
    node_purple: ("#c084fc", "#ec4899"),
    line: ("#14b8a6", "#3b82f6"),
    glyph: "#d1d5db",
};

pub const DARK: Palette = Palette {
    background: "#111827",
    wash: "#042f2e",
    surface: "rgba(31, 41, 55, 0.5)",
    surface_border: "#374151",
    text_primary: "#f3f4f6",
    text_secondary: "#d1d5db",
    text_muted: "#9ca3af",
    badge_bg: "#374151",
    ring: "rgba(45, 212, 191, 0.3)",
    grid_line: "#d1d5db",
    terminal_ok: "#4ade80",
    decor_opacity: "0.1",
    orb_purple: ("#581c87", "#831843"),
    orb_blue: ("#1e3a8a", "#134e4a"),
    node_teal: ("#0f766e", "#1e40af"),
    node_purple: ("#6b21a8", "#831843"),
    line: ("#0f766e", "#1d4ed8"),
    glyph: "#374151",
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

impl Palette {
    /// Custom properties for this palette under `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let pair = |(from, to): (&str, &str)| format!("{}, {}", from, to);
        format!(
            "{selector} {{\n  \
               --bg: {};\n  --wash: {};\n  --surface: {};\n  --surface-border: {};\n  \
               --text-primary: {};\n  --text-secondary: {};\n  --text-muted: {};\n  \
               --badge-bg: {};\n  --ring: {};\n  --grid-line: {};\n  --terminal-ok: {};\n  \
               --decor-opacity: {};\n  --orb-purple: {};\n  --orb-blue: {};\n  \
               --node-teal: {};\n  --node-purple: {};\n  --line: {};\n  --glyph: {};\n}}\n",
            self.background,
            self.wash,
            self.surface,
            self.surface_border,
            self.text_primary,
            self.text_secondary,
            self.text_muted,
            self.badge_bg,
            self.ring,
            self.grid_line,
            self.terminal_ok,
            self.decor_opacity,
            pair(self.orb_purple),
            pair(self.orb_blue),
            pair(self.node_teal),
            pair(self.node_purple),
            pair(self.line),
            self.glyph,
        )
    }
}

/// Both palettes, scoped to `.light` and `.dark`.
pub fn palette_css() -> String {
    let mut css = palette(Theme::Light).to_css(".light");
    css.push_str(&palette(Theme::Dark).to_css(".dark"));
    css
}
