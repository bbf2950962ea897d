//! Link Tree Core Library
//!
//! Everything behind the single-page link tree that is not presentation:
//! the link list, profile content, theme preference, and page metadata.
//!
//! ## Overview
//!
//! - [`links::shipped`] is the ordered, hand-authored [`LinkList`]
//! - [`render::cards`] turns it into [`CardView`]s with the navigation
//!   contract and enter-animation delays already applied
//! - [`PreferenceStore`] resolves and persists the dark/light flag
//! - [`SiteMetadata`] holds the document title and social-preview tags
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use linktree_core::{links, render, MemoryStore, NoColorScheme, PreferenceStore};
//!
//! let mut prefs = PreferenceStore::resolve_initial(Arc::new(MemoryStore::new()), &NoColorScheme);
//! prefs.toggle();
//!
//! for card in render::cards(&links::shipped()) {
//!     println!("{} -> {:?}", card.title, card.action.href());
//! }
//! ```

pub mod error;
pub mod links;
pub mod metadata;
pub mod motion;
pub mod preference;
pub mod profile;
pub mod render;
pub mod storage;
pub mod types;

// Re-exports
pub use error::{LinkTreeError, LinkTreeResult};
pub use metadata::{HeadTag, HeadTagKind, IconLink, SiteMetadata};
pub use preference::{ColorSchemeSignal, NoColorScheme, PreferenceStore, THEME_KEY};
pub use profile::Profile;
pub use render::{CardAction, CardView};
pub use storage::{default_data_dir, open_or_memory, KeyValueStore, MemoryStore, Storage};
pub use types::*;
