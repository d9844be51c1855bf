//! Collection views and their atomic units
//!
//! - `AlignBodyRow` / `AlignBody`: scrolling row of circular thumbnails
//! - `CollectionCardGrid` / `CollectionCard`: two-row scrolling card grid

use dioxus::prelude::*;
use nusantara_core::{AlignBodyRowView, AlignBodyView, CollectionCardGridView, CollectionCardView};
use nusantara_ui::style::{
    background, baseline_padding, horizontal_inset, px, shape_radius, text_class,
};
use nusantara_ui::CroppedImage;

use crate::context::use_resources;

/// Horizontally scrolling row of thumbnails
#[component]
pub fn AlignBodyRow(view: AlignBodyRowView) -> Element {
    let style = format!(
        "gap: {}; {}",
        px(view.spacing),
        horizontal_inset(view.content_padding, view.items.is_empty())
    );

    rsx! {
        div { class: "align-body-row", style: "{style}",
            for (index, item) in view.items.iter().enumerate() {
                AlignBody { key: "{index}", view: item.clone() }
            }
        }
    }
}

/// Circular thumbnail with a caption under it
#[component]
pub fn AlignBody(view: AlignBodyView) -> Element {
    let resources = use_resources();
    let caption = resources.label(&view.label);
    let src = resources.image(&view.image);
    let caption_class = format!("align-body__caption {}", text_class(view.caption_style));
    let caption_style = baseline_padding(view.caption_padding);

    rsx! {
        div { class: "align-body",
            CroppedImage {
                src: src,
                alt: caption.clone(),
                size: view.image_size,
                shape: view.shape,
                scale: view.content_scale,
            }
            span { class: "{caption_class}", style: "{caption_style}", "{caption}" }
        }
    }
}

/// Fixed-height grid, filled column by column
#[component]
pub fn CollectionCardGrid(view: CollectionCardGridView) -> Element {
    let style = format!(
        "height: {}; gap: {}; {}",
        px(view.height),
        px(view.horizontal_spacing),
        horizontal_inset(view.content_padding, view.is_empty())
    );
    let column_style = format!("gap: {};", px(view.vertical_spacing));

    rsx! {
        div { class: "card-grid", style: "{style}",
            for (column_index, column) in view.columns.iter().enumerate() {
                div {
                    key: "{column_index}",
                    class: "card-grid__column",
                    style: "{column_style}",
                    for (row_index, card) in column.iter().enumerate() {
                        CollectionCard { key: "{row_index}", view: card.clone() }
                    }
                }
            }
        }
    }
}

/// Tinted card with the image on the leading side of the label
#[component]
pub fn CollectionCard(view: CollectionCardView) -> Element {
    let resources = use_resources();
    let label = resources.label(&view.label);
    let src = resources.image(&view.image);
    let card_style = format!(
        "width: {}; height: {}; {} border-radius: {};",
        px(view.width),
        px(view.height),
        background(view.color),
        shape_radius(view.shape)
    );
    let label_class = format!("collection-card__label {}", text_class(view.label_style));
    let label_style = format!("padding: {};", px(view.label_padding));

    rsx! {
        div { class: "collection-card", style: "{card_style}",
            CroppedImage {
                src: src,
                alt: label.clone(),
                size: view.image_size,
                scale: view.content_scale,
            }
            span { class: "{label_class}", style: "{label_style}", "{label}" }
        }
    }
}
