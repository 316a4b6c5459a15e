//! Star-rating cell machinery for media-library table views.
//!
//! Starlight provides the in-place editor and delegate pair that renders
//! and edits a star rating inside a table cell:
//!
//! - [`widget::widgets::StarRating`] — the "N of M stars" value object with
//!   its own size hint and paint routine
//! - [`widget::widgets::StarEditor`] — the transient editor widget that
//!   previews a rating under the mouse and commits it on release
//! - [`widget::widgets::StarDelegate`] — the item delegate that paints
//!   committed ratings and owns the editor's lifecycle
//! - [`model`] — model indices, item data, selection state, and the
//!   delegate trait
//! - [`style`] — palette and item-view cell styling shared by the editor
//!   and the delegate
//!
//! The crate builds on `starlight-core` (objects, signals) and
//! `starlight-render` (geometry, renderer abstraction).
//!
//! # Example
//!
//! ```ignore
//! use starlight::model::ModelIndex;
//! use starlight::style::StyleOptionViewItem;
//! use starlight::widget::widgets::StarEditor;
//!
//! let option = StyleOptionViewItem::new(cell_rect, index.clone());
//! let mut editor = StarEditor::new(Some(view), index, option, 5);
//! editor.editing_finished.connect(move |_| {
//!     // Read back editor.star_count() and write it to the model.
//! });
//! ```

pub mod model;
pub mod style;
pub mod widget;
