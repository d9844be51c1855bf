//! End-to-end tests of the default home screen
//!
//! Renders the default screen, resolves every handle through the built-in
//! resources and checks what a user would see.

use nusantara_core::{
    render, LayoutMetrics, MainScreenView, NavDestination, NavigationChrome, Orientation,
    ResourceResolver, ScreenContent, ScreenState, SectionBody, StaticResources,
};

const CAPTIONS: [&str; 6] = [
    "Bali",
    "Lombok",
    "Jakarta",
    "Raja Ampat",
    "Yogyakarta",
    "Komodo Island",
];

fn render_default(orientation: Orientation) -> MainScreenView {
    let state = ScreenState {
        orientation,
        ..ScreenState::default()
    };
    render(&state, &ScreenContent::default(), &LayoutMetrics::default())
}

#[test]
fn test_both_collections_show_six_destinations_in_order() {
    let res = StaticResources::default();
    let view = render_default(Orientation::Portrait);

    let SectionBody::AlignBodyRow(row) = &view.content.sections[0].body else {
        panic!("first section should be the thumbnail row");
    };
    let row_captions: Vec<String> = row.items.iter().map(|i| res.label_or_key(&i.label)).collect();
    assert_eq!(row_captions, CAPTIONS);

    let SectionBody::CollectionCardGrid(grid) = &view.content.sections[1].body else {
        panic!("second section should be the card grid");
    };
    let grid_captions: Vec<String> = grid.cards().map(|c| res.label_or_key(&c.label)).collect();
    assert_eq!(grid_captions, CAPTIONS);
}

#[test]
fn test_section_titles_resolve() {
    let res = StaticResources::default();
    let view = render_default(Orientation::Portrait);
    let titles: Vec<String> = view
        .content
        .sections
        .iter()
        .map(|s| res.resolve_label(&s.title).unwrap())
        .collect();
    assert_eq!(titles, ["Popular Destinations", "Favorite Collections"]);
}

#[test]
fn test_every_image_resolves() {
    let res = StaticResources::default();
    let view = render_default(Orientation::Landscape);
    for section in &view.content.sections {
        let images: Vec<_> = match &section.body {
            SectionBody::AlignBodyRow(row) => row.items.iter().map(|i| &i.image).collect(),
            SectionBody::CollectionCardGrid(grid) => grid.cards().map(|c| &c.image).collect(),
        };
        for image in images {
            let src = res.resolve_image(image).unwrap();
            assert!(src.starts_with("assets/destinations/"));
            assert!(src.ends_with(".jpg"));
        }
    }
}

#[test]
fn test_navigation_entries_in_both_orientations() {
    let res = StaticResources::default();
    for orientation in [Orientation::Portrait, Orientation::Landscape] {
        let view = render_default(orientation);
        let items = view.navigation.items();
        let labels: Vec<String> = items.iter().map(|i| res.label_or_key(&i.label)).collect();
        assert_eq!(labels, ["Home", "Profile"]);
        assert_eq!(items[0].destination, NavDestination::Home);
        assert!(items[0].selected);
        assert!(!items[1].selected);
    }
}

#[test]
fn test_placement_follows_orientation() {
    assert!(matches!(
        render_default(Orientation::Portrait).navigation,
        NavigationChrome::BottomBar(_)
    ));
    assert!(matches!(
        render_default(Orientation::Landscape).navigation,
        NavigationChrome::Rail(_)
    ));
}

#[test]
fn test_view_tree_serializes_to_json() {
    let view = render_default(Orientation::Landscape);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["orientation"], "landscape");
    assert_eq!(json["navigation"]["placement"], "rail");
    assert_eq!(json["navigation"]["container_color"], "surface");
    assert_eq!(json["navigation"]["items"][0]["label_style"], "label-medium");
    assert_eq!(json["content"]["sections"][1]["body"]["cell_height"], 76.0);
    assert_eq!(json["content"]["search"]["placeholder"], "Search");
    assert_eq!(json["content"]["sections"][0]["body"]["kind"], "align-body-row");
    assert_eq!(json["content"]["sections"][1]["body"]["kind"], "collection-card-grid");
    assert_eq!(json["content"]["sections"][1]["body"]["columns"][0][1]["label"], "title_lombok");

    let back: MainScreenView = serde_json::from_value(json).unwrap();
    assert_eq!(back, view);
}
