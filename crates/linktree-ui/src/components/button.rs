//! Button Components
//!
//! Round, translucent icon buttons that float above the page.

use dioxus::prelude::*;

/// Icon button for compact actions (theme toggle, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = icon_button_class(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_button_class_merges_extra() {
        assert_eq!(icon_button_class(None), "icon-btn");
        assert_eq!(icon_button_class(Some("")), "icon-btn");
        assert_eq!(icon_button_class(Some("theme-toggle")), "icon-btn theme-toggle");
    }
}
