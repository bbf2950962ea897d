//! Link Card Components
//!
//! One card per link entry. Live cards are anchors that open in a new
//! context without referrer or opener; coming-soon cards are inert and show
//! a badge where live cards show the external-link glyph.
//!
//! Hover and press feedback is pure CSS (`:hover`, `:active`), so cards hold
//! no state of their own.

use dioxus::prelude::*;
use linktree_core::render::{CardAction, CardView};
use linktree_core::{IconTag, LinkList};

use super::Glyph;

/// Properties for the LinkCard component
#[derive(Clone, PartialEq, Props)]
pub struct LinkCardProps {
    pub card: CardView,
}

#[component]
pub fn LinkCard(props: LinkCardProps) -> Element {
    let card = props.card;
    let class = card.class();
    let title = card.title.clone();
    let slot_style = slot_style(card.enter_delay);
    let tile_style = format!("background: {};", card.gradient);

    let description = match card.description.as_deref() {
        Some(text) => rsx! { p { class: "link-description", "{text}" } },
        None => rsx! {},
    };

    let trailing = match &card.action {
        CardAction::External { .. } => rsx! {
            Glyph { icon: IconTag::ExternalLink, size: 18, class: "external-glyph".to_string() }
        },
        CardAction::Disabled { badge } => rsx! {
            span { class: "soon-badge", "{badge}" }
        },
    };

    let body = rsx! {
        div { class: "link-icon", style: "{tile_style}",
            Glyph { icon: card.icon, size: 20 }
        }
        div { class: "link-text",
            span { class: "link-title", "{title}" }
            {description}
        }
        div { class: "link-trailing", {trailing} }
    };

    let surface = match &card.action {
        CardAction::External { href, target, rel } => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: "{target}",
                rel: "{rel}",
                {body}
            }
        },
        CardAction::Disabled { .. } => rsx! {
            div {
                class: "{class}",
                role: "link",
                "aria-disabled": "true",
                {body}
            }
        },
    };

    rsx! {
        div { class: "link-slot enter-left", style: "{slot_style}",
            {surface}
        }
    }
}

fn slot_style(delay_secs: f32) -> String {
    format!("animation-delay: {:.2}s;", delay_secs)
}

/// Properties for the LinkList component
#[derive(Clone, PartialEq, Props)]
pub struct LinkListViewProps {
    pub links: LinkList,
}

/// Renders every entry in order, keyed by title.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkListView { links: linktree_core::links::shipped() }
/// }
/// ```
#[component]
pub fn LinkListView(props: LinkListViewProps) -> Element {
    let cards = linktree_core::render::cards(&props.links);
    tracing::trace!(count = cards.len(), "Rendering link cards");

    rsx! {
        nav { class: "link-list", "aria-label": "Links",
            for card in cards {
                LinkCard { key: "{card.key}", card: card.clone() }
            }
        }
    }
}
