use dioxus::prelude::*;
use nusantara_core::StaticResources;

use crate::context::{get_config, use_orientation, Resources};
use crate::pages::MainScreen;
use crate::theme::{theme_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the resource resolver and the orientation signal.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);

    // Provide resources to all child components
    use_context_provider(|| Resources::new(StaticResources::new(config.asset_root.clone())));

    let orientation = use_orientation(config.pinned_orientation);

    rsx! {
        style { {theme_variables()} }
        style { {GLOBAL_STYLES} }
        MainScreen { orientation: orientation() }
    }
}
