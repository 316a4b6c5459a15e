//! Item data values exchanged between models, views, and delegates.

/// A value stored in or read back from a model cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    /// No value.
    #[default]
    Empty,
    /// An integer value, e.g. a star rating.
    Int(i32),
    /// A text value.
    Text(String),
}

impl ItemData {
    /// Returns the integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` if this holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<i32> for ItemData {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<String> for ItemData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ItemData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(ItemData::Int(4).as_int(), Some(4));
        assert_eq!(ItemData::Int(4).as_str(), None);
        assert_eq!(ItemData::from("abc").as_str(), Some("abc"));
        assert!(ItemData::default().is_empty());
    }
}
