//! The widget layer.
//!
//! Provides the [`Widget`] trait, the shared [`WidgetBase`] implementation,
//! widget events, layout size hints, and the concrete widgets under
//! [`widgets`].

mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, MouseReleaseEvent, PaintEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{PaintContext, Widget};
