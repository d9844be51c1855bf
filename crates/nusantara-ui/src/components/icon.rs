//! Icon glyphs
//!
//! Outline icons drawn inline as SVG so they pick up `currentColor`.

use dioxus::prelude::*;
use nusantara_core::Icon;

/// Inline SVG for an [`Icon`]
#[component]
pub fn IconGlyph(
    /// Which glyph to draw
    icon: Icon,
    /// Edge length in pixels
    #[props(default = 24)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph_paths(icon)}
        }
    }
}

fn glyph_paths(icon: Icon) -> Element {
    match icon {
        Icon::Home => rsx! {
            // Lucide house
            path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
            path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
        },
        Icon::AccountCircle => rsx! {
            // Lucide circle-user
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "10", r: "3" }
            path { d: "M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662" }
        },
        Icon::Search => rsx! {
            // Lucide search
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
    }
}
