//! Home page - the whole link tree.
//!
//! Layered back to front: decorative backdrop, then the centered column with
//! the profile card, link list and footer. The theme toggle floats above.

use dioxus::prelude::*;
use linktree_core::{links, Profile, SiteMetadata, Theme};
use linktree_ui::{LinkListView, ThemeToggle};

use crate::components::{Backdrop, PageFooter, ProfileCard, SiteHead};

#[component]
pub fn Home(
    /// Theme currently displayed
    theme: Theme,
    /// Called when the toggle is pressed
    on_toggle: EventHandler<()>,
) -> Element {
    let page_class = format!("page {}", theme.root_class());
    let profile = Profile::shipped();

    rsx! {
        SiteHead { metadata: SiteMetadata::shipped() }

        main { class: "{page_class}",
            ThemeToggle { theme, on_toggle: move |_| on_toggle.call(()) }

            div { class: "page-column",
                ProfileCard { profile: profile.clone() }

                div { class: "lift-in",
                    LinkListView { links: links::shipped() }
                }

                PageFooter { profile }
            }

            Backdrop {}
        }
    }
}
