//! Static content catalog.
//!
//! A catalog is an ordered list of [`ContentItem`]s. Position is identity:
//! duplicates are allowed and nothing is ever sorted or filtered.

use serde::{Deserialize, Serialize};

use crate::resource::{images, labels, ImageRef, LabelRef};

/// One (image, label) pair shown by a collection view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentItem {
    pub image: ImageRef,
    pub label: LabelRef,
}

impl ContentItem {
    pub fn new(image: ImageRef, label: LabelRef) -> Self {
        Self { image, label }
    }
}

impl From<(ImageRef, LabelRef)> for ContentItem {
    fn from((image, label): (ImageRef, LabelRef)) -> Self {
        Self::new(image, label)
    }
}

/// The six Indonesian destinations, in display order
pub fn destinations() -> Vec<ContentItem> {
    vec![
        ContentItem::new(images::BALI, labels::TITLE_BALI),
        ContentItem::new(images::LOMBOK, labels::TITLE_LOMBOK),
        ContentItem::new(images::JAKARTA, labels::TITLE_JAKARTA),
        ContentItem::new(images::RAJAAMPAT, labels::TITLE_RAJAAMPAT),
        ContentItem::new(images::YOGYAKARTA, labels::TITLE_YOGYAKARTA),
        ContentItem::new(images::KOMODOISLAND, labels::TITLE_KOMODOISLAND),
    ]
}

/// Everything the home screen shows, per section
///
/// The two sections take independent catalogs even though the default screen
/// hands both the same destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenContent {
    pub top_title: LabelRef,
    pub top_items: Vec<ContentItem>,
    pub middle_title: LabelRef,
    pub middle_items: Vec<ContentItem>,
}

impl Default for ScreenContent {
    fn default() -> Self {
        Self {
            top_title: labels::TOP_TITLE,
            top_items: destinations(),
            middle_title: labels::MIDDLE_TITLE,
            middle_items: destinations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_order() {
        let items = destinations();
        let keys: Vec<&str> = items.iter().map(|i| i.image.key()).collect();
        assert_eq!(
            keys,
            ["bali", "lombok", "jakarta", "rajaampat", "yogyakarta", "komodoisland"]
        );
    }

    #[test]
    fn test_labels_pair_with_images() {
        for item in destinations() {
            assert_eq!(item.label.key(), format!("title_{}", item.image.key()));
        }
    }

    #[test]
    fn test_default_content_uses_destinations_twice() {
        let content = ScreenContent::default();
        assert_eq!(content.top_items, destinations());
        assert_eq!(content.middle_items, destinations());
        assert_eq!(content.top_title, labels::TOP_TITLE);
        assert_eq!(content.middle_title, labels::MIDDLE_TITLE);
    }

    #[test]
    fn test_from_tuple() {
        let item: ContentItem = (images::BALI, labels::TITLE_BALI).into();
        assert_eq!(item, destinations()[0]);
    }
}
