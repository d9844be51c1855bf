//! Screens for Nusantara.

mod main_screen;

pub use main_screen::MainScreen;
