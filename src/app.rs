use dioxus::prelude::*;
use linktree_core::{PreferenceStore, Theme};

use crate::context::use_store;
use crate::pages::Home;
use crate::theme::{motion_styles, palette_css, GLOBAL_STYLES};

/// Query the webview's `prefers-color-scheme` media signal.
///
/// Any failure reads as "no signal".
async fn query_prefers_dark() -> Option<bool> {
    let eval = document::eval(
        "return window.matchMedia ? window.matchMedia('(prefers-color-scheme: dark)').matches : null;",
    );
    match eval.await {
        Ok(value) => value.as_bool(),
        Err(e) => {
            tracing::debug!("Color scheme query failed: {:?}", e);
            None
        }
    }
}

/// Mirror the theme class onto `<html>` so anything outside the page root
/// (scrollbars, overscroll) follows it too.
fn apply_root_class(theme: Theme) {
    let dark = theme.is_dark();
    let _ = document::eval(&format!(
        "document.documentElement.classList.toggle('dark', {}); \
         document.documentElement.classList.toggle('light', {});",
        dark, !dark
    ));
}

/// Root application component.
///
/// Resolves the theme preference on mount and shows a blank surface until
/// it is known, so the page never flashes the wrong palette.
#[component]
pub fn App() -> Element {
    let store = use_store();
    let mut prefs: Signal<Option<PreferenceStore>> = use_signal(|| None);

    // Resolve once on mount
    use_hook(move || {
        spawn(async move {
            let backend = store.0.clone();
            // The OS signal is only consulted when nothing is stored.
            let signal = match PreferenceStore::stored(&*backend) {
                Some(_) => None,
                None => query_prefers_dark().await,
            };
            let resolved = PreferenceStore::resolve_initial(backend, &signal);
            tracing::info!("Theme resolved: {}", resolved.theme());
            prefs.set(Some(resolved));
        });
    });

    use_effect(move || {
        if let Some(p) = prefs.read().as_ref() {
            apply_root_class(p.theme());
        }
    });

    let styles = rsx! {
        style { {GLOBAL_STYLES} }
        style { {palette_css()} }
        style { {motion_styles()} }
    };

    let Some(current) = prefs() else {
        return rsx! {
            {styles}
            div { class: "page-loading" }
        };
    };

    let on_toggle = move |_| {
        if let Some(p) = prefs.write().as_mut() {
            let dark = p.toggle();
            tracing::debug!(dark, "Theme toggled");
        }
    };

    rsx! {
        {styles}
        Home { theme: current.theme(), on_toggle }
    }
}
