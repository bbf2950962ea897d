//! Card view models for the link list.
//!
//! The UI renders [`CardView`]s rather than raw entries, so the navigation
//! contract (new context, no referrer, no opener) lives in one place.

use serde::Serialize;

use crate::motion::stagger_delay;
use crate::types::{Accent, IconTag, LinkEntry, LinkList};

/// Browsing context for outbound links.
pub const LINK_TARGET: &str = "_blank";

/// Relationship attributes for outbound links.
pub const LINK_REL: &str = "noopener noreferrer";

/// Badge text on cards that are not live yet.
pub const COMING_SOON_BADGE: &str = "Soon™";

/// What clicking a card does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Open `href` in a new, referrer-isolated context.
    External {
        href: String,
        target: &'static str,
        rel: &'static str,
    },
    /// No navigation; show a badge instead of the external-link glyph.
    Disabled { badge: &'static str },
}

impl CardAction {
    pub fn href(&self) -> Option<&str> {
        match self {
            CardAction::External { href, .. } => Some(href),
            CardAction::Disabled { .. } => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, CardAction::Disabled { .. })
    }
}

/// Everything needed to paint one link card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Stable rendering key (the entry title).
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: IconTag,
    pub accent: Accent,
    pub gradient: String,
    /// Seconds before the enter animation starts.
    pub enter_delay: f32,
    pub action: CardAction,
}

impl CardView {
    pub fn from_entry(index: usize, entry: &LinkEntry) -> Self {
        let action = match entry.target.url() {
            Some(url) => CardAction::External {
                href: url.to_string(),
                target: LINK_TARGET,
                rel: LINK_REL,
            },
            None => CardAction::Disabled {
                badge: COMING_SOON_BADGE,
            },
        };

        Self {
            key: entry.title.clone(),
            title: entry.title.clone(),
            description: entry.target.description().map(str::to_string),
            icon: entry.icon,
            accent: entry.accent,
            gradient: entry.accent.css_gradient(),
            enter_delay: stagger_delay(index),
            action,
        }
    }

    /// Extra CSS class for the card anchor.
    pub fn class(&self) -> &'static str {
        if self.action.is_disabled() {
            "link-card disabled"
        } else {
            "link-card"
        }
    }
}

/// One card per entry, in list order.
pub fn cards(links: &LinkList) -> Vec<CardView> {
    links
        .iter()
        .enumerate()
        .map(|(index, entry)| CardView::from_entry(index, entry))
        .collect()
}
