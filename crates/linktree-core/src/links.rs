//! The shipped link list.

use crate::types::{Accent, IconTag, LinkEntry, LinkList};

/// Build the link list compiled into the app.
pub fn shipped() -> LinkList {
    let entries = vec![
        LinkEntry::coming_soon(
            "Portfolio 🚀",
            "Building something awesome... ETA: When it's ready 😉",
            IconTag::Globe,
            Accent::Emerald,
        ),
        LinkEntry::available(
            "GitHub",
            "https://github.com/root-Akira",
            IconTag::Github,
            Accent::Violet,
        ),
        LinkEntry::available(
            "LinkedIn",
            "https://linkedin.com/in/sunny-singh-1318a4290",
            IconTag::Linkedin,
            Accent::Indigo,
        ),
        LinkEntry::available(
            "Twitter",
            "https://x.com/with_AK1RA",
            IconTag::Twitter,
            Accent::Cyan,
        ),
        LinkEntry::available(
            "Instagram",
            "https://www.instagram.com/with_ak1ra?igsh=bGZmeTV0ZGVvcHh5",
            IconTag::Instagram,
            Accent::Rose,
        ),
        LinkEntry::available(
            "Telegram",
            "http://t.me/With_AK1RA",
            IconTag::MessageSquare,
            Accent::Sky,
        ),
        LinkEntry::coming_soon(
            "Blog 📝",
            "Brewing tech stories... Loading... ⌛",
            IconTag::Terminal,
            Accent::Amber,
        ),
    ];

    checked(entries)
}

/// An authoring mistake (duplicate title) is logged and renders an empty page
/// rather than aborting the app.
fn checked(entries: Vec<LinkEntry>) -> LinkList {
    match LinkList::new(entries) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Shipped link list rejected: {}", e);
            LinkList::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_has_seven_entries() {
        let links = shipped();
        assert_eq!(links.len(), 7);
        let titles: Vec<_> = links.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Portfolio 🚀",
                "GitHub",
                "LinkedIn",
                "Twitter",
                "Instagram",
                "Telegram",
                "Blog 📝"
            ]
        );
    }

    #[test]
    fn test_shipped_titles_unique() {
        let links = shipped();
        assert!(LinkList::new(links.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_checked_rejects_duplicates_as_empty() {
        let entries = vec![
            LinkEntry::available("GitHub", "https://github.com/a", IconTag::Github, Accent::Violet),
            LinkEntry::available("GitHub", "https://github.com/b", IconTag::Github, Accent::Violet),
        ];
        assert!(checked(entries).is_empty());
    }

    #[test]
    fn test_checked_keeps_distinct_entries() {
        let entries = vec![
            LinkEntry::available("GitHub", "https://github.com/a", IconTag::Github, Accent::Violet),
            LinkEntry::coming_soon("Blog", "Soon", IconTag::Terminal, Accent::Amber),
        ];
        assert_eq!(checked(entries).len(), 2);
    }
}
