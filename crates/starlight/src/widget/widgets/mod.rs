//! Concrete widget implementations.

mod star_delegate;
mod star_editor;
mod star_rating;

pub use star_delegate::StarDelegate;
pub use star_editor::{StarEditor, INVALID_STAR_COUNT, STAR_ZERO_ZONE_RATIO};
pub use star_rating::{EditMode, StarRating, MIN_STAR_COUNT, PAINTING_SCALE_FACTOR};
