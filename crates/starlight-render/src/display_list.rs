//! Recording renderer backend.
//!
//! [`DisplayListRenderer`] captures draw commands into a list instead of
//! rasterizing them. It backs headless tests, which assert on the recorded
//! commands, and could feed a retained-mode backend that replays them.
//!
//! Recorded geometry is resolved into absolute coordinates: the renderer
//! tracks the translation stack itself, so a `FillRect` command holds the
//! rectangle as it would land on the surface regardless of nested
//! `translate()` calls.

use crate::paint::{Paint, Stroke};
use crate::renderer::Renderer;
use crate::types::{Point, Rect};

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// State save.
    Save,
    /// State restore.
    Restore,
    /// Clip to a rectangle, in absolute coordinates.
    ClipRect(Rect),
    /// Rectangle fill, in absolute coordinates.
    FillRect { rect: Rect, paint: Paint },
    /// Rectangle outline, in absolute coordinates.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// Closed polygon fill, vertices in absolute coordinates.
    FillPolygon { points: Vec<Point>, paint: Paint },
    /// Open polyline, vertices in absolute coordinates.
    Polyline { points: Vec<Point>, stroke: Stroke },
}

/// Saved render state.
#[derive(Debug, Clone, Copy, Default)]
struct RenderState {
    tx: f32,
    ty: f32,
}

/// A [`Renderer`] that records commands instead of drawing.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    commands: Vec<DrawCommand>,
    state: RenderState,
    stack: Vec<RenderState>,
}

impl DisplayListRenderer {
    /// Create an empty display list renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands and reset state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.state = RenderState::default();
        self.stack.clear();
    }

    /// Whether the save/restore stack is balanced.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    /// All recorded rectangle fills, in draw order.
    pub fn fill_rects(&self) -> Vec<(Rect, Paint)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, paint } => Some((*rect, *paint)),
                _ => None,
            })
            .collect()
    }

    /// All recorded polygon fills, in draw order.
    pub fn filled_polygons(&self) -> Vec<(Vec<Point>, Paint)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPolygon { points, paint } => Some((points.clone(), *paint)),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded polygon fills.
    pub fn filled_polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillPolygon { .. }))
            .count()
    }

    /// Number of recorded polylines.
    pub fn polyline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polyline { .. }))
            .count()
    }

    fn map_rect(&self, rect: Rect) -> Rect {
        rect.offset(self.state.tx, self.state.ty)
    }

    fn map_points(&self, points: &[Point]) -> Vec<Point> {
        points
            .iter()
            .map(|p| Point::new(p.x + self.state.tx, p.y + self.state.ty))
            .collect()
    }
}

impl Renderer for DisplayListRenderer {
    fn save(&mut self) {
        self.stack.push(self.state);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => {
                self.state = state;
                self.commands.push(DrawCommand::Restore);
            }
            None => {
                tracing::warn!("restore() without matching save()");
            }
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.tx += tx;
        self.state.ty += ty;
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClipRect(self.map_rect(rect)));
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.commands.push(DrawCommand::FillRect {
            rect: self.map_rect(rect),
            paint,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect: self.map_rect(rect),
            stroke: *stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        self.commands.push(DrawCommand::FillPolygon {
            points: self.map_points(points),
            paint,
        });
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: self.map_points(points),
            stroke: *stroke,
        });
    }
}
