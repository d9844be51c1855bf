//! View tree produced by the render functions in [`crate::layout`].
//!
//! Every node is plain data: resource handles, theme slots and measurements.
//! A renderer walks the tree and draws it; nothing here knows about pixels,
//! widgets or events.

use serde::{Deserialize, Serialize};

use crate::metrics::{BaselinePadding, ColorSlot, ContentScale, Dp, ShapeSlot, TextStyle};
use crate::navigation::{Icon, NavigationItem};
use crate::orientation::Orientation;
use crate::resource::{ImageRef, LabelRef};

/// Root of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainScreenView {
    pub orientation: Orientation,
    pub navigation: NavigationChrome,
    pub content: ContentScreenView,
}

impl MainScreenView {
    /// The bottom bar, present only in portrait
    pub fn bottom_bar(&self) -> Option<&NavigationBarView> {
        match &self.navigation {
            NavigationChrome::BottomBar(bar) => Some(bar),
            NavigationChrome::Rail(_) => None,
        }
    }

    /// The side rail, present only in landscape
    pub fn rail(&self) -> Option<&NavigationBarView> {
        match &self.navigation {
            NavigationChrome::Rail(rail) => Some(rail),
            NavigationChrome::BottomBar(_) => None,
        }
    }
}

/// Exactly one navigation surface per screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "placement", rename_all = "kebab-case")]
pub enum NavigationChrome {
    /// Docked below the content
    BottomBar(NavigationBarView),
    /// Docked to the leading edge, beside the content
    Rail(NavigationBarView),
}

impl NavigationChrome {
    pub fn items(&self) -> &[NavigationItem] {
        match self {
            NavigationChrome::BottomBar(bar) | NavigationChrome::Rail(bar) => &bar.items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationBarView {
    /// Background of the bar or rail
    pub container_color: ColorSlot,
    pub items: Vec<NavigationItem>,
}

/// Vertically scrolling column with the search field and the sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScreenView {
    pub leading_spacer: Dp,
    pub search: SearchBarView,
    pub sections: Vec<HomeSectionView>,
    pub trailing_spacer: Dp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBarView {
    pub value: String,
    pub placeholder: String,
    pub placeholder_visible: bool,
    pub leading_icon: Icon,
    pub min_height: Dp,
    pub horizontal_padding: Dp,
}

/// Titled wrapper around one child view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSectionView {
    pub title: LabelRef,
    pub title_style: TextStyle,
    pub title_padding: BaselinePadding,
    pub title_inset: Dp,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionBody {
    AlignBodyRow(AlignBodyRowView),
    CollectionCardGrid(CollectionCardGridView),
}

impl SectionBody {
    /// Number of atomic units in the body
    pub fn unit_count(&self) -> usize {
        match self {
            SectionBody::AlignBodyRow(row) => row.items.len(),
            SectionBody::CollectionCardGrid(grid) => grid.len(),
        }
    }
}

/// Horizontally scrolling row of circular thumbnails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignBodyRowView {
    pub spacing: Dp,
    pub content_padding: Dp,
    pub items: Vec<AlignBodyView>,
}

/// Circular thumbnail with a caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignBodyView {
    pub image: ImageRef,
    pub label: LabelRef,
    pub image_size: Dp,
    pub shape: ShapeSlot,
    pub content_scale: ContentScale,
    pub caption_style: TextStyle,
    pub caption_padding: BaselinePadding,
}

/// Horizontally scrolling grid with a fixed number of rows
///
/// Cells are stored column by column. Reading the columns in order, and each
/// column top to bottom, yields the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCardGridView {
    pub rows: usize,
    pub height: Dp,
    /// Height of each row; cards never exceed it
    pub cell_height: Dp,
    pub horizontal_spacing: Dp,
    pub vertical_spacing: Dp,
    pub content_padding: Dp,
    pub columns: Vec<Vec<CollectionCardView>>,
}

impl CollectionCardGridView {
    /// Total number of cards
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cards in input order
    pub fn cards(&self) -> impl Iterator<Item = &CollectionCardView> {
        self.columns.iter().flatten()
    }

    /// Card at a grid position, if any
    pub fn cell(&self, column: usize, row: usize) -> Option<&CollectionCardView> {
        self.columns.get(column).and_then(|c| c.get(row))
    }
}

/// Tinted rounded card with an image beside a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCardView {
    pub image: ImageRef,
    pub label: LabelRef,
    pub width: Dp,
    pub height: Dp,
    pub shape: ShapeSlot,
    pub color: ColorSlot,
    pub image_size: Dp,
    pub content_scale: ContentScale,
    pub label_style: TextStyle,
    pub label_padding: Dp,
}
