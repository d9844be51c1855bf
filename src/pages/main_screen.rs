//! Main screen - the whole app.
//!
//! Re-renders the core view tree whenever the orientation or the search
//! query changes, then draws it.

use dioxus::prelude::*;
use nusantara_core::{
    render, ContentScreenView, LayoutMetrics, Orientation, ScreenContent, ScreenState,
    SearchQuery, SectionBody,
};
use nusantara_ui::style::px;

use crate::components::{
    AlignBodyRow, BottomNavigationBar, CollectionCardGrid, HomeSection, NavigationRailBar,
    SearchBar,
};

/// Root screen: navigation chrome placed by orientation around the content.
#[component]
pub fn MainScreen(orientation: Orientation) -> Element {
    let search = use_signal(SearchQuery::new);
    let content = use_hook(ScreenContent::default);
    let metrics = use_hook(LayoutMetrics::default);

    let state = ScreenState {
        orientation,
        search: search.read().clone(),
    };
    let view = render(&state, &content, &metrics);

    rsx! {
        div { class: "main-screen", "data-orientation": "{view.orientation}",
            div { class: "main-screen__body",
                if let Some(rail) = view.rail() {
                    NavigationRailBar { view: rail.clone() }
                }
                ContentScreen { view: view.content.clone(), search }
            }
            if let Some(bar) = view.bottom_bar() {
                BottomNavigationBar { view: bar.clone() }
            }
        }
    }
}

/// Vertically scrolling column: spacer, search, sections, spacer
#[component]
fn ContentScreen(view: ContentScreenView, search: Signal<SearchQuery>) -> Element {
    let leading = format!("height: {};", px(view.leading_spacer));
    let trailing = format!("height: {};", px(view.trailing_spacer));

    rsx! {
        main { class: "content-screen",
            div { class: "spacer", style: "{leading}" }
            SearchBar { view: view.search.clone(), query: search }
            for (index, section) in view.sections.iter().enumerate() {
                HomeSection {
                    key: "{index}",
                    title: section.title.clone(),
                    title_style: section.title_style,
                    title_padding: section.title_padding,
                    title_inset: section.title_inset,
                    {section_body(&section.body)}
                }
            }
            div { class: "spacer", style: "{trailing}" }
        }
    }
}

fn section_body(body: &SectionBody) -> Element {
    match body {
        SectionBody::AlignBodyRow(row) => rsx! {
            AlignBodyRow { view: row.clone() }
        },
        SectionBody::CollectionCardGrid(grid) => rsx! {
            CollectionCardGrid { view: grid.clone() }
        },
    }
}
