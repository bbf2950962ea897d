//! Profile Card Component
//!
//! Welcome line, avatar ring, name and headline above the link list.

use dioxus::prelude::*;
use linktree_core::Profile;

/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProfileCard { profile: Profile::shipped() }
/// }
/// ```
#[component]
pub fn ProfileCard(
    /// Static profile content
    profile: Profile,
) -> Element {
    rsx! {
        header { class: "drop-in delayed",
            h2 { class: "welcome",
                "Welcome to "
                span { class: "brand", "{profile.handle}" }
                " digital space!"
            }
        }

        section { class: "profile drop-in",
            div { class: "avatar-ring",
                div {
                    class: "avatar",
                    role: "img",
                    "aria-label": "{profile.avatar_alt}",
                    "{profile.monogram}"
                }
            }
            h1 { class: "profile-name", "{profile.name}" }
            p { class: "profile-headline", "{profile.headline}" }
        }
    }
}

#[component]
pub fn PageFooter(profile: Profile) -> Element {
    rsx! {
        footer { class: "footer footer-in",
            p { "{profile.footer}" }
            p { class: "footer-note", "{profile.footer_note}" }
        }
    }
}
