//! Navigation entries shown by both chrome variants.
//!
//! Selection is fixed: Home is always selected and Profile never is. Clicks
//! do not change it because there is nowhere else to navigate to yet.

use serde::{Deserialize, Serialize};

use crate::metrics::TextStyle;
use crate::resource::{labels, LabelRef};

/// Where a navigation entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavDestination {
    Home,
    Profile,
}

/// Icon glyphs used by the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    AccountCircle,
    Search,
}

impl NavDestination {
    /// Label handle for this destination
    pub fn label(&self) -> LabelRef {
        match self {
            NavDestination::Home => labels::NAV_HOME,
            NavDestination::Profile => labels::NAV_PROFILE,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            NavDestination::Home => Icon::Home,
            NavDestination::Profile => Icon::AccountCircle,
        }
    }
}

/// One entry in a navigation bar or rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub destination: NavDestination,
    pub icon: Icon,
    pub label: LabelRef,
    pub label_style: TextStyle,
    pub selected: bool,
}

impl NavigationItem {
    fn new(destination: NavDestination, selected: bool) -> Self {
        Self {
            destination,
            icon: destination.icon(),
            label: destination.label(),
            label_style: TextStyle::LabelMedium,
            selected,
        }
    }
}

/// The two entries, in display order
pub fn navigation_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new(NavDestination::Home, true),
        NavigationItem::new(NavDestination::Profile, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_then_profile() {
        let items = navigation_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].destination, NavDestination::Home);
        assert_eq!(items[1].destination, NavDestination::Profile);
    }

    #[test]
    fn test_only_home_is_selected() {
        let items = navigation_items();
        assert!(items[0].selected);
        assert!(!items[1].selected);
    }

    #[test]
    fn test_icons_and_labels() {
        let items = navigation_items();
        assert_eq!(items[0].icon, Icon::Home);
        assert_eq!(items[0].label, labels::NAV_HOME);
        assert_eq!(items[1].icon, Icon::AccountCircle);
        assert_eq!(items[1].label, labels::NAV_PROFILE);
    }

    #[test]
    fn test_labels_use_label_medium() {
        assert!(navigation_items()
            .iter()
            .all(|item| item.label_style == TextStyle::LabelMedium));
    }
}
