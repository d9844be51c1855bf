//! Fixed-size image cropped to fill its box

use dioxus::prelude::*;
use nusantara_core::{ContentScale, Dp, ShapeSlot};

use crate::style::{px, shape_radius};

/// CSS for a square image box of `size` with the given shape
pub fn cropped_image_style(size: Dp, shape: Option<ShapeSlot>, scale: ContentScale) -> String {
    let fit = match scale {
        ContentScale::Crop => "cover",
    };
    let radius = shape.map(shape_radius).unwrap_or("0");
    format!(
        "width: {w}; height: {w}; object-fit: {fit}; border-radius: {radius}; flex-shrink: 0;",
        w = px(size),
    )
}

/// Square image cropped to fill, optionally clipped to a shape
///
/// An empty `src` renders an empty box of the same size, which is how a
/// failed image lookup shows up.
#[component]
pub fn CroppedImage(
    /// Resolved image source
    src: String,
    /// Content description, read by assistive tech
    alt: String,
    size: Dp,
    shape: Option<ShapeSlot>,
    #[props(default = ContentScale::Crop)] scale: ContentScale,
) -> Element {
    let style = cropped_image_style(size, shape, scale);

    if src.is_empty() {
        return rsx! {
            div { class: "cropped-image empty", style: "{style}", role: "img", "aria-label": "{alt}" }
        };
    }

    rsx! {
        img { class: "cropped-image", src: "{src}", alt: "{alt}", style: "{style}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_thumbnail_style() {
        let style = cropped_image_style(Dp(88.0), Some(ShapeSlot::Circle), ContentScale::Crop);
        assert!(style.contains("width: 88px; height: 88px;"));
        assert!(style.contains("object-fit: cover"));
        assert!(style.contains("border-radius: 50%"));
    }

    #[test]
    fn unshaped_image_has_square_corners() {
        let style = cropped_image_style(Dp(80.0), None, ContentScale::Crop);
        assert!(style.contains("border-radius: 0;"));
    }
}
