//! Rendering primitives for Starlight.
//!
//! This crate provides the 2D drawing surface that widgets paint onto:
//!
//! - **Types**: [`Point`], [`Size`], [`Rect`], [`Color`] geometry and
//!   color primitives
//! - **Paint**: [`Paint`] fill styles and [`Stroke`] outline styles
//! - **Renderer**: the [`Renderer`] trait defining the drawing interface,
//!   plus [`RendererScope`] for RAII state save/restore
//! - **Display List**: [`DisplayListRenderer`], a recording backend that
//!   captures draw commands for inspection and headless testing
//!
//! Widgets are written against `&mut dyn Renderer`, so the same paint code
//! drives a real backend in production and the display list in tests.

pub mod display_list;
pub mod paint;
pub mod renderer;
pub mod types;

pub use display_list::{DisplayListRenderer, DrawCommand};
pub use paint::{Paint, Stroke};
pub use renderer::{Renderer, RendererScope};
pub use types::{Color, Point, Rect, Size};
