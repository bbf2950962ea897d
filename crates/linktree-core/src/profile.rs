//! Profile card content.

/// Static profile card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    /// Shown inside the avatar ring.
    pub monogram: &'static str,
    pub avatar: &'static str,
    pub avatar_alt: &'static str,
    pub headline: &'static str,
    pub footer: &'static str,
    pub footer_note: &'static str,
}

impl Profile {
    pub fn shipped() -> Self {
        Self {
            name: "Sunny Singh",
            handle: "AK1RA",
            monogram: "AK",
            avatar: "/myAvatar.png",
            avatar_alt: "AK1RA Profile",
            headline: "AK1RA | Web3 Enthusiast | Linux Enthusiast | Blockchain Event Manager | \
                       Discord Server Designer | Social Media Manage | Founding Member of @campustocrypto",
            footer: "© 2025 Sunny Singh (AK1RA)",
            footer_note: "Made with ❤️ and modern web tech",
        }
    }
}
