//! Core types for Link Tree
//!
//! A [`LinkEntry`] is one hand-authored card. Whether it navigates anywhere is
//! carried by [`LinkTarget`] rather than a placeholder URL.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LinkTreeError, LinkTreeResult};

/// Placeholder URL used by hand-authored link lists for unfinished entries.
pub const SENTINEL_URL: &str = "#";

/// Where a link card leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    /// Live external destination.
    Available { url: String },
    /// Not published yet; the description is shown under the title.
    ComingSoon { description: String },
}

impl LinkTarget {
    pub fn is_available(&self) -> bool {
        matches!(self, LinkTarget::Available { .. })
    }

    /// Destination URL, if the link is live.
    pub fn url(&self) -> Option<&str> {
        match self {
            LinkTarget::Available { url } => Some(url),
            LinkTarget::ComingSoon { .. } => None,
        }
    }

    /// Secondary text shown beneath the title.
    pub fn description(&self) -> Option<&str> {
        match self {
            LinkTarget::Available { .. } => None,
            LinkTarget::ComingSoon { description } => Some(description),
        }
    }
}

/// Symbolic glyph selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    Globe,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    MessageSquare,
    Terminal,
    ExternalLink,
    Moon,
    Sun,
    Code,
    Hash,
    Database,
}

impl IconTag {
    /// Stable lowercase name, used in CSS classes and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            IconTag::Globe => "globe",
            IconTag::Github => "github",
            IconTag::Linkedin => "linkedin",
            IconTag::Twitter => "twitter",
            IconTag::Instagram => "instagram",
            IconTag::MessageSquare => "message-square",
            IconTag::Terminal => "terminal",
            IconTag::ExternalLink => "external-link",
            IconTag::Moon => "moon",
            IconTag::Sun => "sun",
            IconTag::Code => "code",
            IconTag::Hash => "hash",
            IconTag::Database => "database",
        }
    }
}

/// Symbolic gradient palette for a card's icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// emerald-400 → teal-500
    Emerald,
    /// violet-400 → purple-500
    Violet,
    /// blue-500 → indigo-600
    Indigo,
    /// blue-400 → cyan-500
    Cyan,
    /// pink-400 → rose-500
    Rose,
    /// blue-400 → sky-500
    Sky,
    /// amber-400 → orange-500
    Amber,
}

impl Accent {
    /// Gradient stops as `(from, to)` hex colors.
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Accent::Emerald => ("#34d399", "#14b8a6"),
            Accent::Violet => ("#a78bfa", "#a855f7"),
            Accent::Indigo => ("#3b82f6", "#4f46e5"),
            Accent::Cyan => ("#60a5fa", "#06b6d4"),
            Accent::Rose => ("#f472b6", "#f43f5e"),
            Accent::Sky => ("#60a5fa", "#0ea5e9"),
            Accent::Amber => ("#fbbf24", "#f97316"),
        }
    }

    /// CSS background value for the icon tile.
    pub fn css_gradient(&self) -> String {
        let (from, to) = self.gradient();
        format!("linear-gradient(to bottom right, {}, {})", from, to)
    }
}

/// One outbound link card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    pub target: LinkTarget,
    pub icon: IconTag,
    pub accent: Accent,
}

impl LinkEntry {
    /// A live link.
    pub fn available(
        title: impl Into<String>,
        url: impl Into<String>,
        icon: IconTag,
        accent: Accent,
    ) -> Self {
        Self {
            title: title.into(),
            target: LinkTarget::Available { url: url.into() },
            icon,
            accent,
        }
    }

    /// A placeholder card that does not navigate.
    pub fn coming_soon(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: IconTag,
        accent: Accent,
    ) -> Self {
        Self {
            title: title.into(),
            target: LinkTarget::ComingSoon {
                description: description.into(),
            },
            icon,
            accent,
        }
    }

    /// Build from the hand-authored `(title, url, description)` shape, where
    /// `url == "#"` marks an unfinished entry.
    pub fn from_raw(
        title: impl Into<String>,
        url: &str,
        description: Option<&str>,
        icon: IconTag,
        accent: Accent,
    ) -> Self {
        if url == SENTINEL_URL {
            Self::coming_soon(title, description.unwrap_or_default(), icon, accent)
        } else {
            Self::available(title, url, icon, accent)
        }
    }
}

/// Ordered list of link entries with unique titles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinkList {
    entries: Vec<LinkEntry>,
}

impl LinkList {
    /// Build a list, rejecting duplicate titles.
    pub fn new(entries: Vec<LinkEntry>) -> LinkTreeResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.title.as_str()) {
                return Err(LinkTreeError::DuplicateTitle(entry.title.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkEntry> {
        self.entries.iter()
    }

    pub fn get(&self, title: &str) -> Option<&LinkEntry> {
        self.entries.iter().find(|e| e.title == title)
    }
}

impl<'a> IntoIterator for &'a LinkList {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Class applied to the root display surface.
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accessible label for the toggle control.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    /// Glyph shown on the toggle control.
    pub fn toggle_icon(&self) -> IconTag {
        match self {
            Theme::Light => IconTag::Moon,
            Theme::Dark => IconTag::Sun,
        }
    }

    /// Parse a user-supplied theme name.
    pub fn parse(s: &str) -> LinkTreeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(LinkTreeError::InvalidTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_coming_soon() {
        let entry = LinkEntry::from_raw(
            "Blog",
            "#",
            Some("Loading..."),
            IconTag::Terminal,
            Accent::Amber,
        );
        assert_eq!(
            entry.target,
            LinkTarget::ComingSoon {
                description: "Loading...".to_string()
            }
        );
        assert!(entry.target.url().is_none());
    }

    #[test]
    fn test_raw_url_maps_to_available() {
        let entry = LinkEntry::from_raw(
            "GitHub",
            "https://github.com/x",
            None,
            IconTag::Github,
            Accent::Violet,
        );
        assert_eq!(entry.target.url(), Some("https://github.com/x"));
        assert!(entry.target.description().is_none());
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let result = LinkList::new(vec![
            LinkEntry::available("A", "https://a", IconTag::Globe, Accent::Sky),
            LinkEntry::available("A", "https://b", IconTag::Globe, Accent::Sky),
        ]);
        assert!(matches!(result, Err(LinkTreeError::DuplicateTitle(t)) if t == "A"));
    }

    #[test]
    fn test_accent_gradient_is_stable() {
        assert_eq!(Accent::Violet.css_gradient(), Accent::Violet.css_gradient());
        assert_eq!(
            Accent::Emerald.css_gradient(),
            "linear-gradient(to bottom right, #34d399, #14b8a6)"
        );
        assert_ne!(Accent::Cyan.css_gradient(), Accent::Sky.css_gradient());
    }

    #[test]
    fn test_theme_helpers() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_icon(), IconTag::Sun);
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::parse(" Dark ").unwrap(), Theme::Dark);
        assert!(Theme::parse("sepia").is_err());
    }

    #[test]
    fn test_link_target_serde_tagged() {
        let target = LinkTarget::Available {
            url: "https://x".to_string(),
        };
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"kind":"available","url":"https://x"}"#);
    }
}
