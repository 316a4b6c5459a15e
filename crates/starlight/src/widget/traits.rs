//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in Starlight, and the [`PaintContext`] passed to
//! [`Widget::paint`].

use starlight_core::Object;
use starlight_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::{SizeHint, SizePolicyPair};

/// Context provided during widget painting.
///
/// This wraps a renderer and provides the widget's geometry information
/// for convenient access during the paint operation. The renderer is held
/// as a trait object so the same paint code drives any backend, including
/// the recording renderer used in tests.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The core trait for all widgets.
///
/// `Widget` extends [`Object`] to provide the fundamental interface for all
/// UI elements in Starlight.
///
/// # Required Methods
///
/// Implementors must provide:
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut):
///   Access to the underlying [`WidgetBase`]
/// - [`size_hint()`](Self::size_hint): The widget's preferred size for layout
/// - [`paint()`](Self::paint): How to render the widget
///
/// Many other methods have default implementations that delegate to
/// [`WidgetBase`]. Event handling defaults to "not handled".
pub trait Widget: Object + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// # Coordinate System
    ///
    /// The renderer is already translated so that (0, 0) is the top-left
    /// corner of the widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's size policy.
    fn size_policy(&self) -> SizePolicyPair {
        self.widget_base().size_policy()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Check if the mouse is currently hovering over this widget.
    fn is_hovered(&self) -> bool {
        self.widget_base().is_hovered()
    }

    /// Check if this widget is opaque.
    fn is_opaque(&self) -> bool {
        self.widget_base().is_opaque()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// This is the main event dispatch method. The default implementation
    /// returns `false` to indicate the event was not handled. Override this
    /// to handle events specific to your widget.
    ///
    /// Return `true` if the event was handled and should not propagate
    /// further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point {
        self.widget_base().map_to_parent(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    ///
    /// This schedules a repaint for the next frame. Multiple calls before
    /// the next paint are coalesced.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}
