//! Styling for widgets and item views.
//!
//! The style layer separates *what* a widget draws from *which colors* it
//! draws with. [`Palette`] resolves a ([`ColorGroup`], [`ColorRole`]) pair
//! to a concrete color, and [`ItemViewStyle`] paints the shared parts of
//! item cells (selection highlight, hover, focus) so every delegate renders
//! them consistently.

mod item_view;
mod palette;

pub use item_view::{ItemView, ItemViewStyle, StyleOptionViewItem, ViewItemState};
pub use palette::{ColorGroup, ColorRole, Palette};
