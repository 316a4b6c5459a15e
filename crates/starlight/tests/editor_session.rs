//! End-to-end edit session: delegate opens an editor over a cell, mouse
//! movement previews the rating, release finishes the session, and the
//! committed value comes back through the delegate.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use starlight::model::{ItemData, ItemDelegate, ModelIndex, SelectionModel};
use starlight::style::{ItemView, ItemViewStyle, StyleOptionViewItem};
use starlight::widget::widgets::StarDelegate;
use starlight::widget::{
    KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent, MouseReleaseEvent, WidgetEvent,
};
use starlight_core::init_global_registry;
use starlight_render::{Point, Rect};

struct TableView {
    selection: Mutex<SelectionModel>,
    style: ItemViewStyle,
}

impl TableView {
    fn new() -> Self {
        Self {
            selection: Mutex::new(SelectionModel::new()),
            style: ItemViewStyle::new(),
        }
    }
}

impl ItemView for TableView {
    fn is_selected(&self, index: &ModelIndex) -> bool {
        self.selection.lock().is_selected(index)
    }

    fn style(&self) -> &ItemViewStyle {
        &self.style
    }
}

fn move_event(x: f32) -> WidgetEvent {
    WidgetEvent::MouseMove(MouseMoveEvent::new(
        Point::new(x, 10.0),
        0,
        KeyboardModifiers::NONE,
    ))
}

fn release_event(x: f32) -> WidgetEvent {
    WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(x, 10.0),
        KeyboardModifiers::NONE,
    ))
}

#[test]
fn test_full_edit_session() {
    init_global_registry();

    let view = Arc::new(TableView::new());
    let index = ModelIndex::root(3, 2);
    view.selection.lock().select(index.clone());

    let delegate = StarDelegate::new(view, 5);
    let finished = Arc::new(AtomicI32::new(0));
    let finished_clone = finished.clone();
    delegate.editing_finished.connect(move |_| {
        finished_clone.fetch_add(1, Ordering::SeqCst);
    });

    // Cell is wider than the 100px star strip, so the stars are centered.
    let option = StyleOptionViewItem::new(Rect::new(0.0, 0.0, 140.0, 20.0), index).with_value(2);
    assert!(delegate.start_editing(&option));

    // Hover over the fourth star (strip starts at x = 20).
    assert!(delegate.editor_event(&mut move_event(20.0 + 65.0)));
    assert_eq!(finished.load(Ordering::SeqCst), 0);

    delegate.editor_event(&mut release_event(20.0 + 65.0));
    assert_eq!(finished.load(Ordering::SeqCst), 1);

    assert_eq!(delegate.commit_editing(), Some(ItemData::Int(4)));
    assert!(!delegate.is_editing());
}

#[test]
fn test_leave_reverts_preview() {
    init_global_registry();

    let view = Arc::new(TableView::new());
    let delegate = StarDelegate::new(view, 5);

    let option =
        StyleOptionViewItem::new(Rect::new(0.0, 0.0, 100.0, 20.0), ModelIndex::root(0, 0))
            .with_value(3);
    assert!(delegate.start_editing(&option));

    // Preview five stars, then leave the widget without releasing.
    delegate.editor_event(&mut move_event(95.0));
    delegate.editor_event(&mut WidgetEvent::Leave(LeaveEvent::new()));

    // The preview reverted to the minimum, and committing reflects that.
    assert_eq!(delegate.commit_editing(), Some(ItemData::Int(0)));
}
