//! Theme Toggle Component
//!
//! Fixed top-right control that flips between light and dark. The glyph
//! shows the mode you would switch *to*: a moon in light mode, a sun in dark.

use dioxus::prelude::*;
use linktree_core::Theme;

use super::{Glyph, IconButton};

/// Properties for the ThemeToggle component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    /// Theme currently displayed
    pub theme: Theme,
    /// Called when the user asks to flip the theme
    pub on_toggle: EventHandler<()>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ThemeToggle {
///         theme: prefs.read().theme(),
///         on_toggle: move |_| { prefs.write().toggle(); },
///     }
/// }
/// ```
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let theme = props.theme;

    // Separate branches so the glyph remounts and replays its entrance.
    let glyph = if theme.is_dark() {
        rsx! {
            span { class: "toggle-glyph spin-in-left",
                Glyph { icon: theme.toggle_icon(), size: 22 }
            }
        }
    } else {
        rsx! {
            span { class: "toggle-glyph spin-in-right",
                Glyph { icon: theme.toggle_icon(), size: 22 }
            }
        }
    };

    rsx! {
        div { class: "theme-toggle-wrap fade-in",
            IconButton {
                onclick: move |_| props.on_toggle.call(()),
                aria_label: theme.toggle_label().to_string(),
                class: "theme-toggle".to_string(),
                {glyph}
            }
        }
    }
}
