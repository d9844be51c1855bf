//! Nusantara Core Library
//!
//! Toolkit-agnostic layout model for a travel-destination browsing screen.
//!
//! ## Overview
//!
//! The screen shows a search field, a row of circular destination thumbnails
//! and a two-row grid of collection cards. Navigation chrome adapts to the
//! orientation: a bottom bar in portrait, a side rail in landscape.
//!
//! Nothing here draws. [`layout::render`] turns the current [`ScreenState`]
//! into a [`MainScreenView`] tree of plain data, and a renderer (the Dioxus
//! desktop shell, a test, or `--dump-layout`) walks that tree.
//!
//! ## Quick Start
//!
//! ```
//! use nusantara_core::{render, LayoutMetrics, ScreenContent, ScreenState, Orientation};
//!
//! let state = ScreenState { orientation: Orientation::Landscape, ..Default::default() };
//! let view = render(&state, &ScreenContent::default(), &LayoutMetrics::default());
//!
//! assert!(view.rail().is_some());
//! assert!(view.bottom_bar().is_none());
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod navigation;
pub mod orientation;
pub mod resource;
pub mod search;
pub mod view;

// Re-exports
pub use catalog::{destinations, ContentItem, ScreenContent};
pub use error::{ParseOrientationError, ResourceError, ResourceResult};
pub use layout::{grid_cell, render, GridCell, ScreenState};
pub use metrics::{BaselinePadding, ColorSlot, ContentScale, Dp, LayoutMetrics, ShapeSlot, TextStyle};
pub use navigation::{navigation_items, Icon, NavDestination, NavigationItem};
pub use orientation::Orientation;
pub use resource::{ImageRef, LabelRef, ResourceResolver, StaticResources};
pub use search::{SearchQuery, SEARCH_PLACEHOLDER};
pub use view::*;
