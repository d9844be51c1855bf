//! Search bar bound to a [`SearchQuery`] signal.

use dioxus::prelude::*;
use nusantara_core::{SearchBarView, SearchQuery};
use nusantara_ui::SearchField;

/// Search field for the home screen
///
/// Every edit replaces the whole query through [`SearchQuery::set`]. Nothing
/// is submitted anywhere.
#[component]
pub fn SearchBar(view: SearchBarView, query: Signal<SearchQuery>) -> Element {
    let mut query = query;

    rsx! {
        SearchField {
            value: view.value.clone(),
            placeholder: view.placeholder.clone(),
            leading_icon: view.leading_icon,
            min_height: view.min_height,
            horizontal_padding: view.horizontal_padding,
            oninput: move |value: String| query.write().set(value),
        }
    }
}
