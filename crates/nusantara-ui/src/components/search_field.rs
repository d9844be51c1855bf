//! Search Field Component
//!
//! Single-line text input with a leading icon. Features:
//! - Filled surface-variant background with a bottom indicator line
//! - Placeholder shown only while empty
//! - Leading search glyph that never moves

use dioxus::prelude::*;
use nusantara_core::{Dp, Icon};

use crate::components::IconGlyph;
use crate::style::px;

/// Properties for the SearchField component
#[derive(Clone, PartialEq, Props)]
pub struct SearchFieldProps {
    /// Current field content
    pub value: String,
    /// Called with the full new content after every edit
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search".to_string())]
    pub placeholder: String,
    /// Glyph docked at the leading edge
    #[props(default = Icon::Search)]
    pub leading_icon: Icon,
    #[props(default = Dp(56.0))]
    pub min_height: Dp,
    #[props(default = Dp(16.0))]
    pub horizontal_padding: Dp,
}

/// Search text field
///
/// # Example
///
/// ```rust,ignore
/// let mut query = use_signal(SearchQuery::new);
///
/// rsx! {
///     SearchField {
///         value: query.read().value().to_string(),
///         oninput: move |s| query.write().set(s),
///     }
/// }
/// ```
#[component]
pub fn SearchField(props: SearchFieldProps) -> Element {
    let outer = format!(
        "padding: 0 {pad}; width: 100%;",
        pad = px(props.horizontal_padding)
    );
    let field = format!("min-height: {};", px(props.min_height));

    rsx! {
        div { class: "search-field-wrapper", style: "{outer}",
            label { class: "search-field", style: "{field}",
                span { class: "search-field__icon",
                    IconGlyph { icon: props.leading_icon }
                }
                input {
                    class: "search-field__input text-body-medium",
                    r#type: "text",
                    placeholder: "{props.placeholder}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
            }
        }
    }
}
