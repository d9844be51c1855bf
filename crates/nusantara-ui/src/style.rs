//! Inline style helpers mapping core measurements and slots to CSS.

use nusantara_core::{BaselinePadding, ColorSlot, Dp, ShapeSlot, TextStyle};

/// One unit is one CSS pixel
pub fn px(dp: Dp) -> String {
    format!("{}px", dp.value())
}

/// CSS class carrying a typography slot
pub fn text_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::TitleMedium => "text-title-medium",
        TextStyle::BodyMedium => "text-body-medium",
        TextStyle::LabelMedium => "text-label-medium",
    }
}

/// CSS value for a color slot
pub fn color_var(slot: ColorSlot) -> &'static str {
    match slot {
        ColorSlot::Surface => "var(--color-surface)",
        ColorSlot::SurfaceVariant => "var(--color-surface-variant)",
    }
}

/// CSS `border-radius` value for a shape slot
pub fn shape_radius(slot: ShapeSlot) -> &'static str {
    match slot {
        ShapeSlot::Circle => "50%",
        ShapeSlot::Medium => "var(--shape-medium)",
    }
}

/// Padding that positions a single line of text by its baseline
///
/// CSS has no baseline padding, so the line box is given a fixed line height
/// and the remainder above the baseline goes to `padding-top`. The text
/// classes use a 20px line box with the baseline 15px down.
pub fn baseline_padding(padding: BaselinePadding) -> String {
    const LINE_HEIGHT: f32 = 20.0;
    const ASCENT: f32 = 15.0;
    let top = (padding.top.value() - ASCENT).max(0.0);
    let bottom = (padding.bottom.value() - (LINE_HEIGHT - ASCENT)).max(0.0);
    format!("line-height: {LINE_HEIGHT}px; padding-top: {top}px; padding-bottom: {bottom}px;")
}

/// Leading and trailing inset of a horizontal scroll region
///
/// An empty region gets no inset so it collapses to zero width.
pub fn horizontal_inset(padding: Dp, is_empty: bool) -> String {
    if is_empty {
        String::new()
    } else {
        format!("padding: 0 {};", px(padding))
    }
}

/// Background for a container tinted with a color slot
pub fn background(slot: ColorSlot) -> String {
    format!("background: {};", color_var(slot))
}

/// Join a base class with modifiers that are switched on
pub fn class_list(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut class = base.to_string();
    for (modifier, on) in modifiers {
        if *on {
            class.push(' ');
            class.push_str(modifier);
        }
    }
    class
}
