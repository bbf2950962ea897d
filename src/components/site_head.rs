//! Document head: title, description and social-preview tags.

use dioxus::prelude::*;
use linktree_core::{HeadTag, HeadTagKind, SiteMetadata};

#[component]
pub fn SiteHead(metadata: SiteMetadata) -> Element {
    let title = metadata.title;
    let tags = metadata.head_tags();

    rsx! {
        document::Title { "{title}" }
        for tag in tags {
            {head_tag(tag)}
        }
    }
}

fn head_tag(tag: HeadTag) -> Element {
    match tag.kind {
        HeadTagKind::Name => rsx! {
            document::Meta { name: tag.key, content: tag.value }
        },
        HeadTagKind::Property => rsx! {
            document::Meta { property: tag.key, content: tag.value }
        },
        HeadTagKind::Link => match (tag.sizes, tag.mime) {
            (Some(sizes), Some(mime)) => rsx! {
                document::Link { rel: tag.key, href: tag.value, sizes, r#type: mime }
            },
            (Some(sizes), None) => rsx! {
                document::Link { rel: tag.key, href: tag.value, sizes }
            },
            (None, Some(mime)) => rsx! {
                document::Link { rel: tag.key, href: tag.value, r#type: mime }
            },
            (None, None) => rsx! {
                document::Link { rel: tag.key, href: tag.value }
            },
        },
    }
}
