//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw` - View drawing, dispatched on the current route
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Grid layout logic
//! - `listing_card.rs` - Listing card widget with photo carousel
//! - `dropdown.rs` - Profile menu trigger and panel
//! - `images.rs` - Listing photos via terminal graphics protocols

mod draw;
pub mod dropdown;
pub mod images;
pub mod layout;
pub mod listing_card;
pub mod theme;

pub use draw::draw;
