//! Property-based tests for link rendering and theme persistence
//!
//! Uses proptest to verify invariants that must hold for any link list.

use std::sync::Arc;

use linktree_core::render::{self, CardAction};
use linktree_core::{
    Accent, IconTag, LinkEntry, LinkList, MemoryStore, NoColorScheme, PreferenceStore,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn url_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-z]{1,12}\\.[a-z]{2,4}/[a-zA-Z0-9_]{0,16}")
        .expect("valid regex")
}

/// `None` produces a coming-soon entry.
fn target_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => url_strategy().prop_map(Some),
        1 => Just(None),
    ]
}

/// Lists with unique titles ("link-0", "link-1", ...).
fn link_list_strategy(max: usize) -> impl Strategy<Value = LinkList> {
    prop::collection::vec(target_strategy(), 0..max).prop_map(|targets| {
        let entries = targets
            .into_iter()
            .enumerate()
            .map(|(i, target)| {
                let title = format!("link-{}", i);
                match target {
                    Some(url) => LinkEntry::available(title, url, IconTag::Globe, Accent::Sky),
                    None => LinkEntry::coming_soon(title, "soon", IconTag::Terminal, Accent::Amber),
                }
            })
            .collect();
        LinkList::new(entries).expect("titles are unique")
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// One card per entry, in the same order
    #[test]
    fn cards_match_entries(links in link_list_strategy(40)) {
        let cards = render::cards(&links);
        prop_assert_eq!(cards.len(), links.len());
        for (card, entry) in cards.iter().zip(links.iter()) {
            prop_assert_eq!(&card.title, &entry.title);
            prop_assert_eq!(&card.key, &entry.title);
        }
    }

    /// Live cards navigate to exactly their URL in an isolated context;
    /// coming-soon cards never navigate
    #[test]
    fn navigation_contract(links in link_list_strategy(40)) {
        for (card, entry) in render::cards(&links).iter().zip(links.iter()) {
            match entry.target.url() {
                Some(url) => prop_assert_eq!(
                    &card.action,
                    &CardAction::External {
                        href: url.to_string(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                    }
                ),
                None => {
                    prop_assert!(card.action.href().is_none());
                    prop_assert_eq!(&card.action, &CardAction::Disabled { badge: "Soon™" });
                }
            }
        }
    }

    /// Enter delays increase strictly down the list
    #[test]
    fn delays_increase(links in link_list_strategy(40)) {
        let cards = render::cards(&links);
        for pair in cards.windows(2) {
            prop_assert!(pair[1].enter_delay > pair[0].enter_delay);
        }
    }

    /// Any sequence of sets leaves the last value persisted, and a fresh
    /// resolution reads it back
    #[test]
    fn last_write_wins(values in prop::collection::vec(any::<bool>(), 1..20)) {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = PreferenceStore::resolve_initial(store.clone(), &NoColorScheme);
        for v in &values {
            prefs.set(*v);
        }
        let last = *values.last().unwrap();
        let fresh = PreferenceStore::resolve_initial(store, &Some(!last));
        prop_assert_eq!(fresh.is_dark(), last);
    }
}
