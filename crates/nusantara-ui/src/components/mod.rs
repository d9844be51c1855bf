//! Reusable presentational components
//!
//! Leaf widgets shared by the home screen:
//! - Icon glyphs (Lucide outlines)
//! - Cropped images for thumbnails and cards
//! - Navigation entries for the bar and the rail
//! - The search text field

mod cropped_image;
mod icon;
mod nav_item;
mod search_field;

pub use cropped_image::*;
pub use icon::*;
pub use nav_item::*;
pub use search_field::*;
