//! Navigation entry used by both the bottom bar and the side rail

use dioxus::prelude::*;
use nusantara_core::{Icon, TextStyle};

use crate::components::IconGlyph;
use crate::style::{class_list, text_class};

/// Which navigation surface an entry sits in
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSurface {
    BottomBar,
    Rail,
}

/// Class string for an entry
pub fn nav_item_class(surface: NavSurface, selected: bool) -> String {
    class_list(
        "nav-item",
        &[
            ("nav-item--bar", surface == NavSurface::BottomBar),
            ("nav-item--rail", surface == NavSurface::Rail),
            ("selected", selected),
        ],
    )
}

/// Class string for an entry's label
pub fn nav_label_class(style: TextStyle) -> String {
    format!("nav-item__label {}", text_class(style))
}

#[derive(Props, Clone, PartialEq)]
pub struct NavItemProps {
    /// Resolved label text
    pub label: String,
    pub icon: Icon,
    /// Typography slot for the label
    #[props(default = TextStyle::LabelMedium)]
    pub label_style: TextStyle,
    /// Whether the indicator pill is shown
    pub selected: bool,
    pub surface: NavSurface,
    /// Click handler
    pub onclick: EventHandler<()>,
}

/// Icon over label, with a pill behind the icon when selected
#[component]
pub fn NavItem(props: NavItemProps) -> Element {
    let label_class = nav_label_class(props.label_style);

    rsx! {
        button {
            class: nav_item_class(props.surface, props.selected),
            r#type: "button",
            "aria-current": if props.selected { "page" } else { "false" },
            onclick: move |_| props.onclick.call(()),

            span { class: "nav-item__indicator",
                IconGlyph { icon: props.icon }
            }
            span { class: "{label_class}", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_item_classes() {
        assert_eq!(
            nav_item_class(NavSurface::BottomBar, true),
            "nav-item nav-item--bar selected"
        );
        assert_eq!(nav_item_class(NavSurface::BottomBar, false), "nav-item nav-item--bar");
    }

    #[test]
    fn rail_item_classes() {
        assert_eq!(
            nav_item_class(NavSurface::Rail, true),
            "nav-item nav-item--rail selected"
        );
        assert_eq!(nav_item_class(NavSurface::Rail, false), "nav-item nav-item--rail");
    }

    #[test]
    fn label_class_follows_text_style() {
        assert_eq!(
            nav_label_class(TextStyle::LabelMedium),
            "nav-item__label text-label-medium"
        );
        assert_eq!(
            nav_label_class(TextStyle::BodyMedium),
            "nav-item__label text-body-medium"
        );
    }
}
