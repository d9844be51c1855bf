//! Layout measurements and theme slot names.
//!
//! All sizes are in density-independent units ([`Dp`]). Renderers decide how
//! a unit maps to pixels; the desktop shell uses one CSS pixel per unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A density-independent length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// Padding measured from a text baseline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaselinePadding {
    /// Distance from the top of the slot to the first baseline
    pub top: Dp,
    /// Distance from the last baseline to the bottom of the slot
    pub bottom: Dp,
}

/// Named typography slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    TitleMedium,
    BodyMedium,
    LabelMedium,
}

/// Named color slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSlot {
    Surface,
    SurfaceVariant,
}

/// Named corner shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeSlot {
    Circle,
    Medium,
}

/// How an image fills its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentScale {
    /// Scale to cover the box, cropping the overflow
    Crop,
}

/// Every fixed measurement on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Spacer above the search field and below the last section
    pub screen_spacer: Dp,
    pub search_min_height: Dp,
    pub search_horizontal_padding: Dp,

    pub section_title_padding: BaselinePadding,
    pub section_title_inset: Dp,

    pub thumbnail_size: Dp,
    pub thumbnail_caption_padding: BaselinePadding,
    pub thumbnail_spacing: Dp,
    pub row_content_padding: Dp,

    pub card_width: Dp,
    pub card_height: Dp,
    pub card_image_size: Dp,
    pub card_label_padding: Dp,
    pub grid_rows: usize,
    pub grid_spacing: Dp,
    pub grid_height: Dp,
    pub grid_content_padding: Dp,
}

impl LayoutMetrics {
    /// Height of one grid row: the grid height minus the gaps, split evenly
    pub fn grid_cell_height(&self) -> Dp {
        let rows = self.grid_rows.max(1) as f32;
        let gaps = self.grid_spacing.value() * (rows - 1.0);
        Dp(((self.grid_height.value() - gaps) / rows).max(0.0))
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            screen_spacer: Dp(16.0),
            search_min_height: Dp(56.0),
            search_horizontal_padding: Dp(16.0),

            section_title_padding: BaselinePadding {
                top: Dp(40.0),
                bottom: Dp(16.0),
            },
            section_title_inset: Dp(16.0),

            thumbnail_size: Dp(88.0),
            thumbnail_caption_padding: BaselinePadding {
                top: Dp(24.0),
                bottom: Dp(8.0),
            },
            thumbnail_spacing: Dp(8.0),
            row_content_padding: Dp(16.0),

            card_width: Dp(255.0),
            card_height: Dp(80.0),
            card_image_size: Dp(80.0),
            card_label_padding: Dp(8.0),
            grid_rows: 2,
            grid_spacing: Dp(16.0),
            grid_height: Dp(168.0),
            grid_content_padding: Dp(16.0),
        }
    }
}
