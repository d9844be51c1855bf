//! Color tokens for the light scheme.
//!
//! Warm sand palette: surfaces lean pink-beige, accents are a terracotta
//! primary over a blush secondary container.

// === SURFACES ===
pub const BACKGROUND: &str = "#f5f0ee";
pub const SURFACE: &str = "#fffbfa";
pub const SURFACE_VARIANT: &str = "#ece0dc";
pub const OUTLINE: &str = "#85736e";

// === ACCENTS ===
pub const PRIMARY: &str = "#8c4a3a";
pub const ON_PRIMARY: &str = "#ffffff";
pub const SECONDARY_CONTAINER: &str = "#f2d5cd";

// === TEXT ===
pub const ON_SURFACE: &str = "#231917";
pub const ON_SURFACE_VARIANT: &str = "#534340";
