//! Preference storage context for the link tree.
//!
//! The storage backend is injected once at launch and shared with the root
//! component. Nothing else reaches for it.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! dioxus::LaunchBuilder::desktop()
//!     .with_context(SharedStore::open_or_memory(&data_dir))
//!     .launch(App);
//!
//! // In App
//! let store = use_store();
//! ```

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use linktree_core::KeyValueStore;

/// Shared storage backend for the theme preference.
#[derive(Clone)]
pub struct SharedStore(pub Arc<dyn KeyValueStore>);

impl SharedStore {
    /// Open the on-disk store, falling back to memory if that fails.
    pub fn open_or_memory(data_dir: &Path) -> Self {
        Self(linktree_core::open_or_memory(data_dir))
    }
}

/// Hook to access the injected preference storage.
pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}
