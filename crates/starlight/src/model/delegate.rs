//! Item delegates for custom rendering and editing in views.
//!
//! The delegate system provides a way to customize how items are displayed
//! and edited in item views. This follows the Model/View/Delegate pattern:
//!
//! - **Model**: Provides the data (addressed by [`ModelIndex`])
//! - **View**: Manages layout, scrolling, and selection
//! - **Delegate**: Handles rendering and in-place editing of individual
//!   items
//!
//! Delegates paint through a [`DelegatePaintContext`] and describe each
//! item with a [`StyleOptionViewItem`](crate::style::StyleOptionViewItem).

use starlight_render::{Rect, Renderer, Size};

use super::index::ModelIndex;
use super::role::ItemData;
use crate::style::StyleOptionViewItem;
use crate::widget::WidgetEvent;

/// Context for delegate painting operations.
///
/// Wraps a renderer and provides the current item's rect.
pub struct DelegatePaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    rect: Rect,
}

impl<'a> DelegatePaintContext<'a> {
    /// Creates a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, rect: Rect) -> Self {
        Self { renderer, rect }
    }

    /// Gets the renderer for drawing.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Gets the item's bounding rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The delegate trait for rendering and editing items in views.
///
/// Delegates are responsible for:
/// - Painting items with their current visual state
/// - Providing size hints for layout
/// - Creating and managing editors for in-place editing
///
/// # Editing Lifecycle
///
/// The view calls [`start_editing`](Self::start_editing) when the user
/// begins editing a cell, forwards input to the live editor through
/// [`editor_event`](Self::editor_event), and finishes with either
/// [`commit_editing`](Self::commit_editing) (returning the edited value to
/// write back to the model) or [`cancel_editing`](Self::cancel_editing).
pub trait ItemDelegate: Send + Sync {
    /// Paint the item.
    ///
    /// The delegate should use the information in `option` to determine
    /// how to render the item (colors, state indicators, etc.).
    fn paint(&self, ctx: &mut DelegatePaintContext<'_>, option: &StyleOptionViewItem);

    /// Returns the size hint for the item.
    ///
    /// Views use this to determine item sizes for layout purposes.
    fn size_hint(&self, option: &StyleOptionViewItem) -> Size;

    /// Called when editing should start for an item.
    ///
    /// Return `true` if editing was successfully started.
    /// The default returns `false` (editing not supported).
    fn start_editing(&self, _option: &StyleOptionViewItem) -> bool {
        false
    }

    /// Called when editing should commit.
    ///
    /// Return the edited value to set on the model, or `None` if there is
    /// no active edit. The default returns `None`.
    fn commit_editing(&self) -> Option<ItemData> {
        None
    }

    /// Called when editing should be cancelled.
    fn cancel_editing(&self) {}

    /// Returns `true` if the delegate is currently editing.
    fn is_editing(&self) -> bool {
        false
    }

    /// Returns the editor widget's rectangle if editing.
    fn editor_rect(&self) -> Option<Rect> {
        None
    }

    /// Forward an input event to the live editor, if any.
    ///
    /// Returns `true` if the editor handled the event. The default returns
    /// `false`.
    fn editor_event(&self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// The index being edited, if any.
    fn editing_index(&self) -> Option<ModelIndex> {
        None
    }
}
