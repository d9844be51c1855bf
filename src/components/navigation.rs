//! Navigation chrome
//!
//! Bottom bar for portrait, side rail for landscape. Both show the same two
//! entries and neither navigates anywhere: clicks are traced and dropped.

use dioxus::prelude::*;
use nusantara_core::{NavDestination, NavigationBarView};
use nusantara_ui::style::background;
use nusantara_ui::{NavItem, NavSurface};

use crate::context::use_resources;

fn on_navigation_click(destination: NavDestination) {
    tracing::trace!(?destination, "Navigation entry clicked");
}

/// Bar docked below the content
#[component]
pub fn BottomNavigationBar(view: NavigationBarView) -> Element {
    let resources = use_resources();
    let style = background(view.container_color);

    rsx! {
        nav { class: "bottom-nav", style: "{style}",
            for item in view.items.clone() {
                NavItem {
                    key: "{item.label}",
                    label: resources.label(&item.label),
                    icon: item.icon,
                    label_style: item.label_style,
                    selected: item.selected,
                    surface: NavSurface::BottomBar,
                    onclick: move |_| on_navigation_click(item.destination),
                }
            }
        }
    }
}

/// Rail docked to the leading edge, entries centered vertically
#[component]
pub fn NavigationRailBar(view: NavigationBarView) -> Element {
    let resources = use_resources();
    let style = background(view.container_color);

    rsx! {
        nav { class: "nav-rail", style: "{style}",
            div { class: "nav-rail__items",
                for item in view.items.clone() {
                    NavItem {
                        key: "{item.label}",
                        label: resources.label(&item.label),
                        icon: item.icon,
                        label_style: item.label_style,
                        selected: item.selected,
                        surface: NavSurface::Rail,
                        onclick: move |_| on_navigation_click(item.destination),
                    }
                }
            }
        }
    }
}
