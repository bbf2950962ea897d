//! Document metadata: title, description and social-preview tags.
//!
//! Consumed by crawlers and link-preview generators. The values are authored
//! once here and emitted verbatim.

use serde::Serialize;

/// How a head tag is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadTagKind {
    /// `<meta name=.. content=..>`
    Name,
    /// `<meta property=.. content=..>` (Open Graph)
    Property,
    /// `<link rel=.. href=..>`
    Link,
}

/// One `<meta>` or `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub kind: HeadTagKind,
    pub key: String,
    pub value: String,
    /// `sizes` attribute; icon links only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// `type` attribute; icon links only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl HeadTag {
    fn name(key: &str, value: impl Into<String>) -> Self {
        Self {
            kind: HeadTagKind::Name,
            key: key.to_string(),
            value: value.into(),
            sizes: None,
            mime: None,
        }
    }

    fn property(key: &str, value: impl Into<String>) -> Self {
        Self {
            kind: HeadTagKind::Property,
            key: key.to_string(),
            value: value.into(),
            sizes: None,
            mime: None,
        }
    }

    fn link(rel: &str, href: impl Into<String>) -> Self {
        Self {
            kind: HeadTagKind::Link,
            key: rel.to_string(),
            value: href.into(),
            sizes: None,
            mime: None,
        }
    }

    fn icon(icon: &IconLink) -> Self {
        Self {
            sizes: icon.sizes.map(str::to_string),
            mime: icon.mime.map(str::to_string),
            ..Self::link(icon.rel, icon.href)
        }
    }

    pub fn to_html(&self) -> String {
        let key = escape_attr(&self.key);
        let value = escape_attr(&self.value);
        match self.kind {
            HeadTagKind::Name => format!(r#"<meta name="{}" content="{}">"#, key, value),
            HeadTagKind::Property => format!(r#"<meta property="{}" content="{}">"#, key, value),
            HeadTagKind::Link => {
                let mut html = format!(r#"<link rel="{}" href="{}""#, key, value);
                if let Some(sizes) = &self.sizes {
                    html.push_str(&format!(r#" sizes="{}""#, escape_attr(sizes)));
                }
                if let Some(mime) = &self.mime {
                    html.push_str(&format!(r#" type="{}""#, escape_attr(mime)));
                }
                html.push('>');
                html
            }
        }
    }
}

/// A favicon or touch icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub rel: &'static str,
    pub href: &'static str,
    pub sizes: Option<&'static str>,
    pub mime: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub locale: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: PreviewImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub creator: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

impl Robots {
    fn basic(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{}, {}", index, follow)
    }

    fn googlebot(&self) -> String {
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            self.basic(),
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub url: &'static str,
}

/// The full metadata block for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: Author,
    pub creator: &'static str,
    pub publisher: &'static str,
    /// Canonical origin; a deployment value.
    pub base_url: &'static str,
    pub application_name: &'static str,
    pub generator: &'static str,
    pub referrer: &'static str,
    pub color_scheme: &'static str,
    pub viewport: &'static str,
    pub format_detection: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub icons: &'static [IconLink],
    /// Search-console verification token. Unset unless deployment provides one.
    pub verification: Option<String>,
}

impl SiteMetadata {
    pub fn shipped() -> Self {
        Self {
            title: "AK1RA | Sunny Singh - Web3 Enthusiast & Blockchain Event Manager",
            description: "Welcome to AK1RA digital space! Web3 Enthusiast, Linux Enthusiast, \
                          Blockchain Event Manager, Discord Server Designer, and Social Media Manager. \
                          Founding Member of @campustocrypto.",
            keywords: "AK1RA, Sunny Singh, Web3, Blockchain, Linux, Discord, Social Media, \
                       Event Manager, campustocrypto",
            author: Author {
                name: "Sunny Singh",
                url: "https://github.com/root-Akira",
            },
            creator: "Sunny Singh",
            publisher: "AK1RA",
            base_url: "https://akira-link-tree.vercel.app",
            application_name: "AK1RA Digital Space",
            generator: "Dioxus",
            referrer: "origin-when-cross-origin",
            color_scheme: "dark light",
            viewport: "width=device-width, initial-scale=1, maximum-scale=1",
            format_detection: "telephone=no, address=no, email=no",
            open_graph: OpenGraph {
                kind: "website",
                locale: "en_US",
                url: "https://akira-link-tree.vercel.app",
                site_name: "AK1RA Digital Space",
                title: "AK1RA | Sunny Singh - Web3 Enthusiast & Blockchain Event Manager",
                description: "Welcome to AK1RA digital space! Web3 Enthusiast, Linux Enthusiast, \
                              Blockchain Event Manager, Discord Server Designer, and Social Media Manager.",
                image: PreviewImage {
                    url: "/myAvatar.png",
                    width: 800,
                    height: 800,
                    alt: "AK1RA Profile Picture",
                },
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: "AK1RA | Sunny Singh - Web3 Enthusiast & Blockchain Event Manager",
                description: "Welcome to AK1RA digital space! Web3 Enthusiast, Linux Enthusiast, \
                              Blockchain Event Manager, Discord Server Designer, and Social Media Manager.",
                creator: "@with_AK1RA",
                image: "/myAvatar.png",
            },
            robots: Robots {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
            icons: &[
                IconLink {
                    rel: "icon",
                    href: "/favicon.ico",
                    sizes: Some("any"),
                    mime: None,
                },
                IconLink {
                    rel: "icon",
                    href: "/icon.png",
                    sizes: Some("32x32"),
                    mime: Some("image/png"),
                },
                IconLink {
                    rel: "apple-touch-icon",
                    href: "/apple-icon.png",
                    sizes: Some("180x180"),
                    mime: None,
                },
            ],
            verification: None,
        }
    }

    /// Resolve a site-relative path against the canonical origin.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Head tags in emission order. The document title is not included.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let og = &self.open_graph;
        let tw = &self.twitter;

        let mut tags = vec![
            HeadTag::name("description", self.description),
            HeadTag::name("keywords", self.keywords),
            HeadTag::name("author", self.author.name),
            HeadTag::link("author", self.author.url),
            HeadTag::name("creator", self.creator),
            HeadTag::name("publisher", self.publisher),
            HeadTag::name("application-name", self.application_name),
            HeadTag::name("generator", self.generator),
            HeadTag::name("referrer", self.referrer),
            HeadTag::name("color-scheme", self.color_scheme),
            HeadTag::name("viewport", self.viewport),
            HeadTag::name("format-detection", self.format_detection),
            HeadTag::name("robots", self.robots.basic()),
            HeadTag::name("googlebot", self.robots.googlebot()),
            HeadTag::link("canonical", self.base_url),
            HeadTag::property("og:type", og.kind),
            HeadTag::property("og:locale", og.locale),
            HeadTag::property("og:url", og.url),
            HeadTag::property("og:site_name", og.site_name),
            HeadTag::property("og:title", og.title),
            HeadTag::property("og:description", og.description),
            HeadTag::property("og:image", self.absolute(og.image.url)),
            HeadTag::property("og:image:width", og.image.width.to_string()),
            HeadTag::property("og:image:height", og.image.height.to_string()),
            HeadTag::property("og:image:alt", og.image.alt),
            HeadTag::name("twitter:card", tw.card),
            HeadTag::name("twitter:title", tw.title),
            HeadTag::name("twitter:description", tw.description),
            HeadTag::name("twitter:creator", tw.creator),
            HeadTag::name("twitter:image", self.absolute(tw.image)),
        ];

        tags.extend(self.icons.iter().map(HeadTag::icon));

        if let Some(token) = &self.verification {
            tags.push(HeadTag::name("google-site-verification", token.clone()));
        }

        tags
    }

    /// `<title>` plus every head tag, one per line.
    pub fn to_html(&self) -> String {
        let mut out = format!("<title>{}</title>\n", escape_text(self.title));
        for tag in self.head_tags() {
            out.push_str(&tag.to_html());
            out.push('\n');
        }
        out
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
