//! Error types for Starlight core.

use std::fmt;

use crate::object::ObjectError;

/// The main error type for Starlight core operations.
#[derive(Debug)]
pub enum CoreError {
    /// Object-related error.
    Object(ObjectError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(err) => write!(f, "Object error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Object(err) => Some(err),
        }
    }
}

impl From<ObjectError> for CoreError {
    fn from(err: ObjectError) -> Self {
        Self::Object(err)
    }
}

/// A specialized Result type for Starlight core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
