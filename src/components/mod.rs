//! Screen components for Nusantara.
//!
//! Each component draws one node of the `nusantara-core` view tree.

mod collections;
mod home_section;
mod navigation;
mod search_bar;

pub use collections::{AlignBody, AlignBodyRow, CollectionCard, CollectionCardGrid};
pub use home_section::HomeSection;
pub use navigation::{BottomNavigationBar, NavigationRailBar};
pub use search_bar::SearchBar;
