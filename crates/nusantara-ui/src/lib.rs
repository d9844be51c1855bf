//! Nusantara UI Components
//!
//! Dioxus building blocks for the destination browser. Components take
//! `nusantara-core` types as props and render them with the CSS custom
//! properties defined by the desktop shell's global stylesheet.
//!
//! ## Theme slots
//!
//! Core theme slots map to CSS variables:
//! - **TextStyle** → `.text-title-medium`, `.text-body-medium`, `.text-label-medium`
//! - **ColorSlot** → `--color-surface`, `--color-surface-variant`
//! - **ShapeSlot** → `50%` for circles, `--shape-medium` for cards

pub mod components;
pub mod style;

pub use components::*;
