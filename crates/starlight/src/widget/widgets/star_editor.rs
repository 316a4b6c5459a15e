//! In-place star rating editor.
//!
//! `StarEditor` is opened by [`StarDelegate`] over a table cell and lets
//! the user pick a rating with the mouse. Mouse tracking is on so the
//! widget previews the rating under the cursor without a button held, and
//! the opaque flag keeps the cell underneath from shining through.
//!
//! [`StarDelegate`]: super::StarDelegate

use std::sync::Arc;

use starlight_core::logging::targets;
use starlight_core::{Object, ObjectId, Signal};
use starlight_render::{Renderer, RendererScope};

use super::star_rating::{EditMode, StarRating, MIN_STAR_COUNT};
use crate::model::ModelIndex;
use crate::style::{ColorRole, ItemView, StyleOptionViewItem};
use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// Sentinel returned by [`StarEditor::star_at_position`] when the pointer
/// is outside the star strip.
pub const INVALID_STAR_COUNT: i32 = MIN_STAR_COUNT - 1;

/// Fraction of the strip width at the left edge that maps to zero stars.
///
/// The same fraction is used as a negative tolerance margin when the strip
/// is narrower than the cell, so clearing the rating does not require
/// pixel-perfect aim at the strip's left edge.
pub const STAR_ZERO_ZONE_RATIO: f32 = 0.05;

/// Lets the user edit a star rating in a table cell using the mouse.
///
/// # Signals
///
/// - `editing_finished(())`: Emitted once, on mouse release, when the user
///   has picked a rating. The owning delegate reads the final value back
///   with [`star_count`](Self::star_count).
pub struct StarEditor {
    base: WidgetBase,
    /// Host view, queried for selection state each paint. Optional so the
    /// editor can render standalone.
    view: Option<Arc<dyn ItemView>>,
    index: ModelIndex,
    style_option: StyleOptionViewItem,
    rating: StarRating,
    /// Guards `editing_finished` against double emission.
    finished: bool,

    /// Signal emitted when the edit session is complete.
    pub editing_finished: Signal<()>,
}

impl StarEditor {
    /// Create an editor for the given cell.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new(
        view: Option<Arc<dyn ItemView>>,
        index: ModelIndex,
        style_option: StyleOptionViewItem,
        max_star_count: i32,
    ) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_mouse_tracking(true);
        base.set_opaque(true);
        Self {
            base,
            view,
            index,
            style_option,
            rating: StarRating::new(MIN_STAR_COUNT, max_star_count),
            finished: false,
            editing_finished: Signal::new(),
        }
    }

    /// The cell being edited.
    pub fn index(&self) -> &ModelIndex {
        &self.index
    }

    /// The currently displayed star count.
    pub fn star_count(&self) -> i32 {
        self.rating.star_count()
    }

    /// Whether the edit session has finished.
    ///
    /// Becomes `true` once `editing_finished` has been emitted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Set the displayed star count.
    pub fn set_star_count(&mut self, star_count: i32) {
        if star_count != self.rating.star_count() {
            self.rating.set_star_count(star_count);
            self.base.update();
        }
    }

    /// Paint a star rating cell.
    ///
    /// Draws the standard cell background through the view's style (so
    /// selection and hover colors match the rest of the table), picks the
    /// text brush for the cell's palette state, and paints the stars on
    /// top, clipped to the cell rectangle. Stateless, so a read-only
    /// preview can reuse it without a live editor; [`StarDelegate`] does
    /// exactly that.
    ///
    /// [`StarDelegate`]: super::StarDelegate
    pub fn render_helper(
        renderer: &mut dyn Renderer,
        view: Option<&dyn ItemView>,
        option: &StyleOptionViewItem,
        rating: &StarRating,
        mode: EditMode,
    ) {
        let mut scope = RendererScope::new(renderer);
        scope.clip_rect(option.rect);

        if let Some(view) = view {
            view.style().draw_cell(&mut scope, option);
        }

        let group = option.state.color_group();
        let role = if option.state.selected {
            ColorRole::HighlightedText
        } else {
            ColorRole::Text
        };
        let brush = option.palette.color(group, role);

        rating.paint(&mut scope, option.rect, brush, mode);
    }

    /// Map a widget-local x coordinate to a star count.
    ///
    /// Returns [`INVALID_STAR_COUNT`] when the pointer is outside the star
    /// strip on either side. The first 5% of the strip is an explicit
    /// "clear rating" zone returning 0; when the strip is narrower than the
    /// cell the same margin extends left of the strip so 0 stays easy to
    /// hit.
    pub fn star_at_position(&self, x: f32) -> i32 {
        let stars_width = self.rating.size_hint().width;
        // The stars are drawn centered in a possibly-wider cell, so shift
        // the input the same way.
        let x_offset = ((self.base.width() - stars_width) / 2.0).max(0.0);
        let x = x - x_offset;

        let zero_zone = stars_width * STAR_ZERO_ZONE_RATIO;
        let left_void = if x_offset > zero_zone { -zero_zone } else { 0.0 };

        if x < left_void || x >= stars_width {
            return INVALID_STAR_COUNT;
        }
        if x < zero_zone {
            return 0;
        }

        let segment = stars_width / self.rating.max_star_count() as f32;
        let star = (x / segment) as i32 + 1;

        if star <= 0 || star > self.rating.max_star_count() {
            return 0;
        }
        star
    }

    /// Reset the displayed rating to the minimum.
    fn reset_rating(&mut self) {
        if self.rating.star_count() != MIN_STAR_COUNT {
            self.rating.set_star_count(MIN_STAR_COUNT);
            self.base.update();
        }
    }

    fn finish_editing(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        tracing::trace!(
            target: targets::EDITOR,
            star_count = self.rating.star_count(),
            "editing finished"
        );
        self.editing_finished.emit(());
    }
}

impl Object for StarEditor {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for StarEditor {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.rating.size_hint())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        // An open editor means the pointer is over the cell, and selection
        // may have changed since the editor opened, so rebuild the option
        // fresh each frame.
        let mut option = self.style_option.clone();
        option.rect = self.base.rect();
        option.state.hovered = true;
        if let Some(view) = &self.view {
            option.state.selected = view.is_selected(&self.index);
        }

        let view = self.view.as_deref();
        Self::render_helper(ctx.renderer(), view, &option, &self.rating, EditMode::Editable);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MouseMove(move_event) => {
                let star = self.star_at_position(move_event.local_pos.x);
                if star <= INVALID_STAR_COUNT {
                    self.reset_rating();
                } else if star != self.rating.star_count() {
                    tracing::trace!(target: targets::EDITOR, star, "hover preview");
                    self.rating.set_star_count(star);
                    self.base.update();
                }
                event.accept();
                true
            }
            WidgetEvent::Leave(_) => {
                // Cancel path: revert the hover preview.
                self.reset_rating();
                false
            }
            WidgetEvent::MouseRelease(_) => {
                self.finish_editing();
                event.accept();
                true
            }
            _ => false,
        }
    }
}

static_assertions::assert_impl_all!(StarEditor: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use starlight_core::init_global_registry;
    use starlight_render::{Point, Rect};
    use std::sync::atomic::{AtomicI32, Ordering};

    fn setup() {
        init_global_registry();
    }

    fn editor_with_width(width: f32) -> StarEditor {
        let rect = Rect::new(0.0, 0.0, width, 20.0);
        let option = StyleOptionViewItem::new(rect, ModelIndex::root(0, 0));
        let mut editor = StarEditor::new(None, ModelIndex::root(0, 0), option, 5);
        editor.set_geometry(rect);
        editor
    }

    fn move_event(x: f32) -> WidgetEvent {
        WidgetEvent::MouseMove(crate::widget::MouseMoveEvent::new(
            Point::new(x, 10.0),
            0,
            crate::widget::KeyboardModifiers::NONE,
        ))
    }

    #[test]
    fn test_star_at_position_exact_fit() {
        setup();
        // Strip width 100 fills the 100-wide cell; segment width 20.
        let editor = editor_with_width(100.0);

        for x in 0..5 {
            assert_eq!(editor.star_at_position(x as f32), 0);
        }
        assert_eq!(editor.star_at_position(5.0), 1);
        assert_eq!(editor.star_at_position(21.0), 2);
        assert_eq!(editor.star_at_position(99.0), 5);
        assert_eq!(editor.star_at_position(100.0), INVALID_STAR_COUNT);
        // No negative tolerance when the strip fills the cell.
        assert_eq!(editor.star_at_position(-1.0), INVALID_STAR_COUNT);
    }

    #[test]
    fn test_star_at_position_wider_cell() {
        setup();
        // Strip width 100 centered in a 140-wide cell; stars start at x=20.
        let editor = editor_with_width(140.0);

        // Inside the negative tolerance margin (down to 20 - 5 = 15).
        assert_eq!(editor.star_at_position(16.0), 0);
        assert_eq!(editor.star_at_position(14.0), INVALID_STAR_COUNT);
        // Past the right edge of the strip.
        assert_eq!(editor.star_at_position(120.0), INVALID_STAR_COUNT);
        // Middle of the third segment.
        assert_eq!(editor.star_at_position(20.0 + 50.0), 3);
    }

    #[test]
    fn test_star_at_position_monotonic() {
        setup();
        let editor = editor_with_width(100.0);

        let mut last = 0;
        for x in 0..100 {
            let star = editor.star_at_position(x as f32);
            assert!(star >= last, "star count decreased at x={x}");
            last = star;
        }
    }

    #[test]
    fn test_mouse_move_previews_rating() {
        setup();
        let mut editor = editor_with_width(100.0);

        assert!(editor.event(&mut move_event(50.0)));
        assert_eq!(editor.star_count(), 3);

        // Moving outside the strip resets the preview.
        editor.event(&mut move_event(150.0));
        assert_eq!(editor.star_count(), MIN_STAR_COUNT);
    }

    #[test]
    fn test_leave_resets_rating() {
        setup();
        let mut editor = editor_with_width(100.0);

        editor.event(&mut move_event(90.0));
        assert_eq!(editor.star_count(), 5);

        editor.event(&mut WidgetEvent::Leave(crate::widget::LeaveEvent::new()));
        assert_eq!(editor.star_count(), MIN_STAR_COUNT);
    }

    #[test]
    fn test_release_emits_once() {
        setup();
        let mut editor = editor_with_width(100.0);
        let count = std::sync::Arc::new(AtomicI32::new(0));
        let count_clone = count.clone();
        editor.editing_finished.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let release = || {
            WidgetEvent::MouseRelease(crate::widget::MouseReleaseEvent::new(
                crate::widget::MouseButton::Left,
                Point::new(50.0, 10.0),
                crate::widget::KeyboardModifiers::NONE,
            ))
        };

        editor.event(&mut release());
        editor.event(&mut release());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_paint_standalone() {
        setup();
        let mut editor = editor_with_width(100.0);
        editor.event(&mut move_event(50.0));

        let mut renderer = starlight_render::DisplayListRenderer::new();
        let rect = editor.rect();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        editor.paint(&mut ctx);

        // Three stars plus two placeholder diamonds, balanced state stack.
        assert_eq!(renderer.filled_polygons().len(), 5);
        assert!(renderer.is_balanced());
    }
}
