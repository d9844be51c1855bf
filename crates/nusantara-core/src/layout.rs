//! Render functions: state in, [`view`](crate::view) tree out.
//!
//! Each function is total and side-effect free apart from tracing. Renderers
//! call [`render`] on every state change and draw the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{ContentItem, ScreenContent};
use crate::metrics::{ColorSlot, ContentScale, Dp, LayoutMetrics, ShapeSlot, TextStyle};
use crate::navigation::{navigation_items, Icon};
use crate::orientation::Orientation;
use crate::resource::LabelRef;
use crate::search::{SearchQuery, SEARCH_PLACEHOLDER};
use crate::view::{
    AlignBodyRowView, AlignBodyView, CollectionCardGridView, CollectionCardView,
    ContentScreenView, HomeSectionView, MainScreenView, NavigationBarView, NavigationChrome,
    SearchBarView, SectionBody,
};

/// Inputs that change between render passes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenState {
    pub orientation: Orientation,
    pub search: SearchQuery,
}

/// Position of a cell in a horizontally scrolling grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
}

/// Where item `index` lands in a grid with `rows` fixed rows
///
/// Columns fill top to bottom before the next column starts. A zero row
/// count is treated as one row.
pub fn grid_cell(index: usize, rows: usize) -> GridCell {
    let rows = rows.max(1);
    GridCell {
        column: index / rows,
        row: index % rows,
    }
}

/// Render the whole screen
pub fn render(
    state: &ScreenState,
    content: &ScreenContent,
    metrics: &LayoutMetrics,
) -> MainScreenView {
    debug!(
        orientation = %state.orientation,
        query_len = state.search.value().len(),
        "Rendering main screen"
    );
    main_screen(state.orientation, &state.search, content, metrics)
}

/// Pick the navigation chrome for the orientation and embed the content
pub fn main_screen(
    orientation: Orientation,
    search: &SearchQuery,
    content: &ScreenContent,
    metrics: &LayoutMetrics,
) -> MainScreenView {
    let navigation = match orientation {
        Orientation::Portrait => NavigationChrome::BottomBar(bottom_navigation_bar()),
        Orientation::Landscape => NavigationChrome::Rail(navigation_rail_bar()),
    };

    MainScreenView {
        orientation,
        navigation,
        content: content_screen(search, content, metrics),
    }
}

pub fn content_screen(
    search: &SearchQuery,
    content: &ScreenContent,
    metrics: &LayoutMetrics,
) -> ContentScreenView {
    ContentScreenView {
        leading_spacer: metrics.screen_spacer,
        search: search_bar(search, metrics),
        sections: vec![
            home_section(
                content.top_title.clone(),
                SectionBody::AlignBodyRow(align_body_row(&content.top_items, metrics)),
                metrics,
            ),
            home_section(
                content.middle_title.clone(),
                SectionBody::CollectionCardGrid(collection_card_grid(
                    &content.middle_items,
                    metrics,
                )),
                metrics,
            ),
        ],
        trailing_spacer: metrics.screen_spacer,
    }
}

pub fn bottom_navigation_bar() -> NavigationBarView {
    NavigationBarView {
        container_color: ColorSlot::SurfaceVariant,
        items: navigation_items(),
    }
}

pub fn navigation_rail_bar() -> NavigationBarView {
    NavigationBarView {
        container_color: ColorSlot::Surface,
        items: navigation_items(),
    }
}

pub fn search_bar(search: &SearchQuery, metrics: &LayoutMetrics) -> SearchBarView {
    SearchBarView {
        value: search.value().to_string(),
        placeholder: SEARCH_PLACEHOLDER.to_string(),
        placeholder_visible: search.placeholder_visible(),
        leading_icon: Icon::Search,
        min_height: metrics.search_min_height,
        horizontal_padding: metrics.search_horizontal_padding,
    }
}

/// Wrap a body with a title
pub fn home_section(title: LabelRef, body: SectionBody, metrics: &LayoutMetrics) -> HomeSectionView {
    HomeSectionView {
        title,
        title_style: TextStyle::TitleMedium,
        title_padding: metrics.section_title_padding,
        title_inset: metrics.section_title_inset,
        body,
    }
}

pub fn align_body_row(items: &[ContentItem], metrics: &LayoutMetrics) -> AlignBodyRowView {
    AlignBodyRowView {
        spacing: metrics.thumbnail_spacing,
        content_padding: metrics.row_content_padding,
        items: items.iter().map(|item| align_body(item, metrics)).collect(),
    }
}

pub fn align_body(item: &ContentItem, metrics: &LayoutMetrics) -> AlignBodyView {
    AlignBodyView {
        image: item.image.clone(),
        label: item.label.clone(),
        image_size: metrics.thumbnail_size,
        shape: ShapeSlot::Circle,
        content_scale: ContentScale::Crop,
        caption_style: TextStyle::BodyMedium,
        caption_padding: metrics.thumbnail_caption_padding,
    }
}

pub fn collection_card_grid(
    items: &[ContentItem],
    metrics: &LayoutMetrics,
) -> CollectionCardGridView {
    let rows = metrics.grid_rows.max(1);
    let cell_height = metrics.grid_cell_height();
    let mut columns: Vec<Vec<CollectionCardView>> = Vec::with_capacity(items.len().div_ceil(rows));

    for (index, item) in items.iter().enumerate() {
        let cell = grid_cell(index, rows);
        if cell.row == 0 {
            columns.push(Vec::with_capacity(rows));
        }
        columns[cell.column].push(fit_to_cell(collection_card(item, metrics), cell_height));
    }

    CollectionCardGridView {
        rows,
        height: metrics.grid_height,
        cell_height,
        horizontal_spacing: metrics.grid_spacing,
        vertical_spacing: metrics.grid_spacing,
        content_padding: metrics.grid_content_padding,
        columns,
    }
}

/// Squeeze a card into a grid row that is shorter than the card
fn fit_to_cell(mut card: CollectionCardView, cell_height: Dp) -> CollectionCardView {
    if card.height > cell_height {
        card.height = cell_height;
    }
    if card.image_size > cell_height {
        card.image_size = cell_height;
    }
    card
}

pub fn collection_card(item: &ContentItem, metrics: &LayoutMetrics) -> CollectionCardView {
    CollectionCardView {
        image: item.image.clone(),
        label: item.label.clone(),
        width: metrics.card_width,
        height: metrics.card_height,
        shape: ShapeSlot::Medium,
        color: ColorSlot::SurfaceVariant,
        image_size: metrics.card_image_size,
        content_scale: ContentScale::Crop,
        label_style: TextStyle::TitleMedium,
        label_padding: metrics.card_label_padding,
    }
}
