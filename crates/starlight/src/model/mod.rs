//! The model layer.
//!
//! Provides the types views and delegates use to address and edit items:
//! [`ModelIndex`] for cell identity, [`ItemData`] for cell values,
//! [`SelectionModel`] for selection state, and the [`ItemDelegate`] trait
//! for custom rendering and in-place editing.

mod delegate;
mod index;
mod role;
mod selection;

pub use delegate::{DelegatePaintContext, ItemDelegate};
pub use index::ModelIndex;
pub use role::ItemData;
pub use selection::{SelectionMode, SelectionModel};
