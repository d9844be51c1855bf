//! Opaque resource handles and their resolution.
//!
//! Views never carry display strings or image bytes. They carry [`LabelRef`]
//! and [`ImageRef`] handles, and whoever draws the view asks a
//! [`ResourceResolver`] for the concrete text or image source.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ResourceError, ResourceResult};

/// Handle to a localized string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRef(Cow<'static, str>);

/// Handle to an image asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Cow<'static, str>);

impl LabelRef {
    /// Create a handle from a static key
    pub const fn from_static(key: &'static str) -> Self {
        LabelRef(Cow::Borrowed(key))
    }

    /// Create a handle from an owned key
    pub fn new(key: impl Into<String>) -> Self {
        LabelRef(Cow::Owned(key.into()))
    }

    /// The lookup key
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl ImageRef {
    /// Create a handle from a static key
    pub const fn from_static(key: &'static str) -> Self {
        ImageRef(Cow::Borrowed(key))
    }

    /// Create a handle from an owned key
    pub fn new(key: impl Into<String>) -> Self {
        ImageRef(Cow::Owned(key.into()))
    }

    /// The lookup key
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@string/{}", self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@image/{}", self.0)
    }
}

/// Label keys used by the home screen
pub mod labels {
    use super::LabelRef;

    pub const TOP_TITLE: LabelRef = LabelRef::from_static("top_title");
    pub const MIDDLE_TITLE: LabelRef = LabelRef::from_static("middle_title");
    pub const TITLE_BALI: LabelRef = LabelRef::from_static("title_bali");
    pub const TITLE_LOMBOK: LabelRef = LabelRef::from_static("title_lombok");
    pub const TITLE_JAKARTA: LabelRef = LabelRef::from_static("title_jakarta");
    pub const TITLE_RAJAAMPAT: LabelRef = LabelRef::from_static("title_rajaampat");
    pub const TITLE_YOGYAKARTA: LabelRef = LabelRef::from_static("title_yogyakarta");
    pub const TITLE_KOMODOISLAND: LabelRef = LabelRef::from_static("title_komodoisland");
    pub const NAV_HOME: LabelRef = LabelRef::from_static("bottom_nav_home");
    pub const NAV_PROFILE: LabelRef = LabelRef::from_static("bottom_nav_profile");
}

/// Image keys used by the home screen
pub mod images {
    use super::ImageRef;

    pub const BALI: ImageRef = ImageRef::from_static("bali");
    pub const LOMBOK: ImageRef = ImageRef::from_static("lombok");
    pub const JAKARTA: ImageRef = ImageRef::from_static("jakarta");
    pub const RAJAAMPAT: ImageRef = ImageRef::from_static("rajaampat");
    pub const YOGYAKARTA: ImageRef = ImageRef::from_static("yogyakarta");
    pub const KOMODOISLAND: ImageRef = ImageRef::from_static("komodoisland");
}

/// Pluggable lookup service for resource handles
pub trait ResourceResolver {
    /// Resolve a label handle to display text
    fn resolve_label(&self, label: &LabelRef) -> ResourceResult<String>;

    /// Resolve an image handle to a source the renderer can load
    fn resolve_image(&self, image: &ImageRef) -> ResourceResult<String>;

    /// Resolve a label, falling back to its raw key on a miss
    fn label_or_key(&self, label: &LabelRef) -> String {
        self.resolve_label(label).unwrap_or_else(|e| {
            warn!(error = %e, "Label lookup failed, rendering key");
            label.key().to_string()
        })
    }

    /// Resolve an image, falling back to an empty source on a miss
    fn image_or_empty(&self, image: &ImageRef) -> String {
        self.resolve_image(image).unwrap_or_else(|e| {
            warn!(error = %e, "Image lookup failed, rendering empty slot");
            String::new()
        })
    }
}

const STRINGS: &[(&str, &str)] = &[
    ("top_title", "Popular Destinations"),
    ("middle_title", "Favorite Collections"),
    ("title_bali", "Bali"),
    ("title_lombok", "Lombok"),
    ("title_jakarta", "Jakarta"),
    ("title_rajaampat", "Raja Ampat"),
    ("title_yogyakarta", "Yogyakarta"),
    ("title_komodoisland", "Komodo Island"),
    ("bottom_nav_home", "Home"),
    ("bottom_nav_profile", "Profile"),
];

const IMAGE_KEYS: &[&str] = &[
    "bali",
    "lombok",
    "jakarta",
    "rajaampat",
    "yogyakarta",
    "komodoisland",
];

/// Built-in resolver: English strings and JPEG files under an asset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResources {
    asset_root: String,
}

impl StaticResources {
    /// Default directory images are served from
    pub const DEFAULT_ASSET_ROOT: &'static str = "assets/destinations";

    pub fn new(asset_root: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    pub fn asset_root(&self) -> &str {
        &self.asset_root
    }
}

impl Default for StaticResources {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ASSET_ROOT)
    }
}

impl ResourceResolver for StaticResources {
    fn resolve_label(&self, label: &LabelRef) -> ResourceResult<String> {
        STRINGS
            .iter()
            .find(|(key, _)| *key == label.key())
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| ResourceError::MissingLabel(label.key().to_string()))
    }

    fn resolve_image(&self, image: &ImageRef) -> ResourceResult<String> {
        if IMAGE_KEYS.contains(&image.key()) {
            let root = self.asset_root.trim_end_matches('/');
            Ok(format!("{}/{}.jpg", root, image.key()))
        } else {
            Err(ResourceError::MissingImage(image.key().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_builtin_label() {
        let res = StaticResources::default();
        for (key, text) in STRINGS {
            let label = LabelRef::new(*key);
            assert_eq!(res.resolve_label(&label).unwrap(), *text);
        }
    }

    #[test]
    fn test_resolves_images_under_asset_root() {
        let res = StaticResources::new("static/img/");
        assert_eq!(
            res.resolve_image(&images::KOMODOISLAND).unwrap(),
            "static/img/komodoisland.jpg"
        );
    }

    #[test]
    fn test_unknown_keys_are_errors() {
        let res = StaticResources::default();
        assert_eq!(
            res.resolve_label(&LabelRef::new("title_atlantis")),
            Err(ResourceError::MissingLabel("title_atlantis".to_string()))
        );
        assert_eq!(
            res.resolve_image(&ImageRef::new("atlantis")),
            Err(ResourceError::MissingImage("atlantis".to_string()))
        );
    }

    #[test]
    fn test_fallbacks_never_fail() {
        let res = StaticResources::default();
        assert_eq!(res.label_or_key(&LabelRef::new("nope")), "nope");
        assert_eq!(res.image_or_empty(&ImageRef::new("nope")), "");
        assert_eq!(res.label_or_key(&labels::NAV_HOME), "Home");
    }

    #[test]
    fn test_static_and_owned_handles_compare_equal() {
        assert_eq!(LabelRef::new("title_bali"), labels::TITLE_BALI);
        assert_eq!(ImageRef::new("bali"), images::BALI);
        assert_eq!(labels::TITLE_BALI.to_string(), "@string/title_bali");
    }

    #[test]
    fn test_handles_serialize_as_bare_keys() {
        let json = serde_json::to_string(&images::LOMBOK).unwrap();
        assert_eq!(json, "\"lombok\"");
        let back: ImageRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, images::LOMBOK);
    }
}
