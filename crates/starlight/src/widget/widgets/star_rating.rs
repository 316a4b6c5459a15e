//! Star rating value object.
//!
//! [`StarRating`] represents "N of M stars" and knows how to draw itself
//! into a rectangle. It carries no widget state; [`StarEditor`] and
//! [`StarDelegate`] both hold one by value and drive it from events.
//!
//! [`StarEditor`]: super::StarEditor
//! [`StarDelegate`]: super::StarDelegate

use std::f32::consts::PI;

use starlight_render::{Color, Point, Rect, Renderer, RendererScope, Size};

/// The smallest valid rating. Zero means "no stars set".
pub const MIN_STAR_COUNT: i32 = 0;

/// Edge length in pixels of the square each star glyph is drawn into.
pub const PAINTING_SCALE_FACTOR: f32 = 20.0;

const DEFAULT_MAX_STAR_COUNT: i32 = 5;

/// Whether unset star positions show a placeholder glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Draw a small diamond at each unset position so the user can see
    /// where to aim.
    Editable,
    /// Draw only the set stars.
    ReadOnly,
}

/// A rating of N out of M stars with a paint routine.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    star_count: i32,
    max_star_count: i32,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(MIN_STAR_COUNT, DEFAULT_MAX_STAR_COUNT)
    }
}

impl StarRating {
    /// Create a rating of `star_count` out of `max_star_count` stars.
    ///
    /// Both values are clamped: `max_star_count` to at least 1 and
    /// `star_count` into `[MIN_STAR_COUNT, max_star_count]`.
    pub fn new(star_count: i32, max_star_count: i32) -> Self {
        let max_star_count = max_star_count.max(1);
        Self {
            star_count: star_count.clamp(MIN_STAR_COUNT, max_star_count),
            max_star_count,
        }
    }

    /// The current star count.
    #[inline]
    pub fn star_count(&self) -> i32 {
        self.star_count
    }

    /// Set the star count, clamped into the valid range.
    pub fn set_star_count(&mut self, star_count: i32) {
        self.star_count = star_count.clamp(MIN_STAR_COUNT, self.max_star_count);
    }

    /// The maximum star count.
    #[inline]
    pub fn max_star_count(&self) -> i32 {
        self.max_star_count
    }

    /// The pixel size of the rendered star strip.
    pub fn size_hint(&self) -> Size {
        Size::new(
            PAINTING_SCALE_FACTOR * self.max_star_count as f32,
            PAINTING_SCALE_FACTOR,
        )
    }

    /// Paint the stars into `rect`, centered, filled with `brush`.
    ///
    /// In [`EditMode::Editable`] every unset position gets a placeholder
    /// diamond glyph.
    pub fn paint(&self, renderer: &mut dyn Renderer, rect: Rect, brush: Color, mode: EditMode) {
        let hint = self.size_hint();
        let x_offset = ((rect.width() - hint.width) / 2.0).max(0.0);
        let y_offset = ((rect.height() - hint.height) / 2.0).max(0.0);

        let mut scope = RendererScope::new(renderer);
        scope.translate(rect.left() + x_offset, rect.top() + y_offset);

        let star = star_polygon();
        let diamond = diamond_polygon();

        for i in 0..self.max_star_count {
            let dx = i as f32 * PAINTING_SCALE_FACTOR;
            if i < self.star_count {
                scope.fill_polygon(&offset_points(&star, dx), brush.into());
            } else if mode == EditMode::Editable {
                scope.fill_polygon(&offset_points(&diamond, dx), brush.into());
            }
        }
    }
}

/// A five-pointed star in a `PAINTING_SCALE_FACTOR`-sized square.
fn star_polygon() -> Vec<Point> {
    let mut points = Vec::with_capacity(5);
    points.push(Point::new(1.0, 0.5));
    for i in 1..5 {
        let angle = 0.8 * i as f32 * PI;
        points.push(Point::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin()));
    }
    scale_points(points)
}

/// A small diamond marking an unset star position.
fn diamond_polygon() -> Vec<Point> {
    scale_points(vec![
        Point::new(0.4, 0.5),
        Point::new(0.5, 0.4),
        Point::new(0.6, 0.5),
        Point::new(0.5, 0.6),
    ])
}

fn scale_points(points: Vec<Point>) -> Vec<Point> {
    points
        .into_iter()
        .map(|p| Point::new(p.x * PAINTING_SCALE_FACTOR, p.y * PAINTING_SCALE_FACTOR))
        .collect()
}

fn offset_points(points: &[Point], dx: f32) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x + dx, p.y)).collect()
}
