//! Titled section wrapper

use dioxus::prelude::*;
use nusantara_core::{BaselinePadding, Dp, LabelRef, TextStyle};
use nusantara_ui::style::{baseline_padding, px, text_class};

use crate::context::use_resources;

/// Heading above an arbitrary child view
///
/// Only the title is inset; the child spans the full width so horizontal
/// lists can scroll under the screen edge.
#[component]
pub fn HomeSection(
    title: LabelRef,
    title_style: TextStyle,
    title_padding: BaselinePadding,
    title_inset: Dp,
    children: Element,
) -> Element {
    let resources = use_resources();
    let text = resources.label(&title);
    let class = format!("section-title {}", text_class(title_style));
    let style = format!(
        "{} padding-left: {inset}; padding-right: {inset};",
        baseline_padding(title_padding),
        inset = px(title_inset)
    );

    rsx! {
        section { class: "home-section",
            h2 { class: "{class}", style: "{style}", "{text}" }
            {children}
        }
    }
}
