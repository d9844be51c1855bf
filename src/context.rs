//! Context providers for Nusantara.
//!
//! Provides the resource resolver and the orientation signal to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Resources::new(StaticResources::default()));
//!
//! // In child components
//! let resources = use_resources();
//! let caption = resources.label(&item.label);
//! ```

use std::rc::Rc;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use nusantara_core::{ImageRef, LabelRef, Orientation, ResourceResolver};

use crate::config::AppConfig;

/// Get the app configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Shared resource resolver for context.
///
/// Wrapped in Rc so every component can hold a cheap clone.
#[derive(Clone)]
pub struct Resources(Rc<dyn ResourceResolver>);

impl Resources {
    pub fn new(resolver: impl ResourceResolver + 'static) -> Self {
        Self(Rc::new(resolver))
    }

    /// Display text for a label, or its key when missing
    pub fn label(&self, label: &LabelRef) -> String {
        self.0.label_or_key(label)
    }

    /// Image source, or an empty string when missing
    pub fn image(&self, image: &ImageRef) -> String {
        self.0.image_or_empty(image)
    }
}

/// Hook to access the resource resolver from context.
pub fn use_resources() -> Resources {
    use_context::<Resources>()
}

/// Hook tracking the window orientation.
///
/// Starts from the window's current inner size and re-derives the
/// orientation on every resize. A pinned orientation never changes.
pub fn use_orientation(pinned: Option<Orientation>) -> Signal<Orientation> {
    let window = use_window();
    let mut orientation = use_signal(move || {
        pinned.unwrap_or_else(|| {
            let size = window.inner_size();
            Orientation::from_size(size.width, size.height)
        })
    });

    use_wry_event_handler(move |event, _| {
        if pinned.is_some() {
            return;
        }
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let next = Orientation::from_size(size.width, size.height);
            if *orientation.peek() != next {
                tracing::debug!(width = size.width, height = size.height, %next, "Orientation changed");
                orientation.set(next);
            }
        }
    });

    orientation
}
