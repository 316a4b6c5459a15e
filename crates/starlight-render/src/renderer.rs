//! Core renderer trait defining the 2D drawing interface.
//!
//! This module defines the [`Renderer`] trait which provides a high-level API
//! for 2D drawing operations. Implementations can use immediate or
//! retained-mode rendering backends; widgets paint against `&mut dyn Renderer`
//! so the same code drives any backend.

use crate::paint::{Paint, Stroke};
use crate::types::{Point, Rect};

/// The core 2D rendering trait.
///
/// # State Stack
///
/// The renderer maintains a state stack that can be saved and restored.
/// This includes translations and clip regions. Prefer [`RendererScope`]
/// over manual `save()`/`restore()` pairing so an early return cannot leave
/// the stack unbalanced.
///
/// The trait is object-safe. Drawing methods take concrete `Paint` and
/// `Stroke` values rather than `impl Into<_>` so widgets can hold a
/// `&mut dyn Renderer`.
pub trait Renderer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state (translation, clip).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Set a rectangular clip region.
    ///
    /// Drawing is clipped to this rectangle, intersected with any existing
    /// clip. The rectangle is in the current (translated) coordinate space.
    fn clip_rect(&mut self, rect: Rect);

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with the specified paint.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Fill a closed polygon with the specified paint.
    ///
    /// The polygon is implicitly closed between the last and first vertex.
    fn fill_polygon(&mut self, points: &[Point], paint: Paint);

    /// Stroke an open polyline through the given points.
    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke);
}

/// RAII guard that saves renderer state on creation and restores it on drop.
///
/// Scoping translation and clip changes this way keeps paint routines from
/// leaking state into whatever draws next, even on early return. The guard
/// itself implements [`Renderer`] by delegation, so it can be drawn on
/// directly.
///
/// # Example
///
/// ```ignore
/// {
///     let mut scope = RendererScope::new(renderer);
///     scope.translate(rect.left(), rect.top());
///     scope.clip_rect(local_rect);
///     scope.fill_rect(local_rect, background.into());
/// } // State restored here
/// ```
pub struct RendererScope<'a> {
    renderer: &'a mut dyn Renderer,
}

impl<'a> RendererScope<'a> {
    /// Save the renderer state and return a guard that restores it on drop.
    pub fn new(renderer: &'a mut dyn Renderer) -> Self {
        renderer.save();
        Self { renderer }
    }
}

impl Renderer for RendererScope<'_> {
    fn save(&mut self) {
        self.renderer.save();
    }

    fn restore(&mut self) {
        self.renderer.restore();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.renderer.translate(tx, ty);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.renderer.clip_rect(rect);
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.renderer.fill_rect(rect, paint);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.renderer.stroke_rect(rect, stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        self.renderer.fill_polygon(points, paint);
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.renderer.draw_polyline(points, stroke);
    }
}

impl Drop for RendererScope<'_> {
    fn drop(&mut self) {
        self.renderer.restore();
    }
}
