//! Item delegate for star rating cells.
//!
//! `StarDelegate` renders rating cells read-only and opens a
//! [`StarEditor`] over the cell when the user starts editing. When the
//! editor reports that editing finished, the delegate re-emits the
//! notification on its own signal and the controller reads the result
//! back through [`commit_editing`](crate::model::ItemDelegate::commit_editing).

use std::sync::Arc;

use parking_lot::Mutex;
use starlight_core::logging::targets;
use starlight_core::Signal;
use starlight_render::{Rect, Size};

use super::star_editor::StarEditor;
use super::star_rating::{EditMode, StarRating, MIN_STAR_COUNT};
use crate::model::{DelegatePaintContext, ItemData, ItemDelegate, ModelIndex};
use crate::style::{ItemView, StyleOptionViewItem};
use crate::widget::{Widget, WidgetEvent};

/// Paints and edits star rating cells.
pub struct StarDelegate {
    view: Arc<dyn ItemView>,
    max_star_count: i32,
    editor: Mutex<Option<StarEditor>>,

    /// Signal emitted when the live editor finishes an edit session.
    ///
    /// Emitted after the editor lock is released, so a connected slot may
    /// call back into the delegate (`commit_editing`, `cancel_editing`).
    pub editing_finished: Signal<()>,
}

impl StarDelegate {
    /// Create a delegate painting through `view`'s style.
    pub fn new(view: Arc<dyn ItemView>, max_star_count: i32) -> Self {
        Self {
            view,
            max_star_count: max_star_count.max(1),
            editor: Mutex::new(None),
            editing_finished: Signal::new(),
        }
    }

    /// The maximum star count cells are rendered with.
    pub fn max_star_count(&self) -> i32 {
        self.max_star_count
    }

    fn rating_for(&self, value: &ItemData) -> StarRating {
        StarRating::new(value.as_int().unwrap_or(MIN_STAR_COUNT), self.max_star_count)
    }
}

impl ItemDelegate for StarDelegate {
    fn paint(&self, ctx: &mut DelegatePaintContext<'_>, option: &StyleOptionViewItem) {
        // The live editor paints the cell it covers.
        if self.editing_index().as_ref() == Some(&option.index) {
            return;
        }
        let rating = self.rating_for(&option.value);
        StarEditor::render_helper(
            ctx.renderer(),
            Some(self.view.as_ref()),
            option,
            &rating,
            EditMode::ReadOnly,
        );
    }

    fn size_hint(&self, option: &StyleOptionViewItem) -> Size {
        self.rating_for(&option.value).size_hint()
    }

    fn start_editing(&self, option: &StyleOptionViewItem) -> bool {
        let mut slot = self.editor.lock();
        if slot.is_some() {
            return false;
        }

        tracing::debug!(
            target: targets::DELEGATE,
            row = option.index.row(),
            column = option.index.column(),
            "opening star editor"
        );

        let mut editor = StarEditor::new(
            Some(self.view.clone()),
            option.index.clone(),
            option.clone(),
            self.max_star_count,
        );
        editor.set_geometry(option.rect);
        if let Some(initial) = option.value.as_int() {
            editor.set_star_count(initial);
        }

        *slot = Some(editor);
        true
    }

    fn commit_editing(&self) -> Option<ItemData> {
        let editor = self.editor.lock().take()?;
        let star_count = editor.star_count();
        tracing::debug!(target: targets::DELEGATE, star_count, "committing star rating");
        Some(ItemData::Int(star_count))
    }

    fn cancel_editing(&self) {
        if self.editor.lock().take().is_some() {
            tracing::debug!(target: targets::DELEGATE, "cancelled star editing");
        }
    }

    fn is_editing(&self) -> bool {
        self.editor.lock().is_some()
    }

    fn editor_rect(&self) -> Option<Rect> {
        self.editor.lock().as_ref().map(|editor| editor.geometry())
    }

    fn editor_event(&self, event: &mut WidgetEvent) -> bool {
        // Dispatch under the lock, but emit only after releasing it: a
        // connected slot is expected to call commit_editing, which takes
        // the same lock.
        let (handled, just_finished) = {
            let mut slot = self.editor.lock();
            let Some(editor) = slot.as_mut() else {
                return false;
            };
            let was_finished = editor.is_finished();
            let handled = editor.event(event);
            (handled, editor.is_finished() && !was_finished)
        };
        if just_finished {
            self.editing_finished.emit(());
        }
        handled
    }

    fn editing_index(&self) -> Option<ModelIndex> {
        self.editor.lock().as_ref().map(|editor| editor.index().clone())
    }
}

static_assertions::assert_impl_all!(StarDelegate: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ItemViewStyle;
    use starlight_core::init_global_registry;
    use starlight_render::DisplayListRenderer;

    struct FixedView {
        style: ItemViewStyle,
        selected: bool,
    }

    impl ItemView for FixedView {
        fn is_selected(&self, _index: &ModelIndex) -> bool {
            self.selected
        }

        fn style(&self) -> &ItemViewStyle {
            &self.style
        }
    }

    fn setup() -> Arc<FixedView> {
        init_global_registry();
        Arc::new(FixedView {
            style: ItemViewStyle::new(),
            selected: false,
        })
    }

    fn cell_option(value: i32) -> StyleOptionViewItem {
        StyleOptionViewItem::new(Rect::new(0.0, 0.0, 100.0, 20.0), ModelIndex::root(0, 0))
            .with_value(value)
    }

    #[test]
    fn test_paint_read_only() {
        let view = setup();
        let delegate = StarDelegate::new(view, 5);
        let mut renderer = DisplayListRenderer::new();
        let option = cell_option(4);

        let mut ctx = DelegatePaintContext::new(&mut renderer, option.rect);
        delegate.paint(&mut ctx, &option);

        // Four stars, no placeholder diamonds.
        assert_eq!(renderer.filled_polygons().len(), 4);
    }

    #[test]
    fn test_size_hint_follows_max() {
        let view = setup();
        let delegate = StarDelegate::new(view, 5);
        assert_eq!(delegate.size_hint(&cell_option(2)), Size::new(100.0, 20.0));
    }

    #[test]
    fn test_editing_lifecycle() {
        let view = setup();
        let delegate = StarDelegate::new(view, 5);
        let option = cell_option(2);

        assert!(!delegate.is_editing());
        assert!(delegate.start_editing(&option));
        assert!(delegate.is_editing());
        // A second edit can't start until the first finishes.
        assert!(!delegate.start_editing(&option));
        assert_eq!(delegate.editor_rect(), Some(option.rect));
        assert_eq!(delegate.editing_index(), Some(option.index.clone()));

        assert_eq!(delegate.commit_editing(), Some(ItemData::Int(2)));
        assert!(!delegate.is_editing());
        assert_eq!(delegate.commit_editing(), None);
    }

    #[test]
    fn test_cancel_discards_editor() {
        let view = setup();
        let delegate = StarDelegate::new(view, 5);

        delegate.start_editing(&cell_option(3));
        delegate.cancel_editing();
        assert!(!delegate.is_editing());
        assert_eq!(delegate.commit_editing(), None);
    }

    #[test]
    fn test_commit_from_finished_slot() {
        use crate::widget::{KeyboardModifiers, MouseButton, MouseMoveEvent, MouseReleaseEvent};
        use parking_lot::Mutex;
        use starlight_render::Point;

        let view = setup();
        let delegate = Arc::new(StarDelegate::new(view, 5));
        assert!(delegate.start_editing(&cell_option(2)));

        // The documented flow: the controller commits from inside the
        // finished notification while the release event is still being
        // dispatched.
        let committed = Arc::new(Mutex::new(None));
        let delegate_clone = delegate.clone();
        let committed_clone = committed.clone();
        delegate.editing_finished.connect(move |_| {
            *committed_clone.lock() = delegate_clone.commit_editing();
        });

        delegate.editor_event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(
            Point::new(70.0, 10.0),
            0,
            KeyboardModifiers::NONE,
        )));
        delegate.editor_event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(70.0, 10.0),
            KeyboardModifiers::NONE,
        )));

        assert_eq!(*committed.lock(), Some(ItemData::Int(4)));
        assert!(!delegate.is_editing());
        // A release with no live editor emits nothing further.
        delegate.editor_event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(70.0, 10.0),
            KeyboardModifiers::NONE,
        )));
        assert_eq!(*committed.lock(), Some(ItemData::Int(4)));
    }

    #[test]
    fn test_skips_painting_edited_cell() {
        let view = setup();
        let delegate = StarDelegate::new(view, 5);
        let option = cell_option(4);
        delegate.start_editing(&option);

        let mut renderer = DisplayListRenderer::new();
        let mut ctx = DelegatePaintContext::new(&mut renderer, option.rect);
        delegate.paint(&mut ctx, &option);

        assert!(renderer.commands().is_empty());
    }
}
