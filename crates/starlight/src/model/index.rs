//! Model index for addressing items in item models.
//!
//! The `ModelIndex` type is the fundamental way to reference items within
//! a model. It contains row, column, and parent information to uniquely
//! identify any item.

/// Represents a position within an item model.
///
/// `ModelIndex` is used by views, delegates, and selection models to locate
/// items within a model. Two independently created indices for the same
/// cell compare equal, so indices can serve as set and map keys.
///
/// # Index Validity
///
/// Model indices should be used immediately and not stored long-term.
/// After model modifications (insertions, deletions, moves), previously
/// obtained indices may become stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    /// The row within the parent.
    row: usize,
    /// The column within the parent.
    column: usize,
    /// The parent index. `None` indicates a root-level item.
    parent: Option<Box<ModelIndex>>,
    /// Whether this index is valid.
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index is used to represent:
    /// - The root of the model (as a parent reference)
    /// - A non-existent or out-of-bounds item
    /// - An uninitialized index
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            parent: None,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    ///
    /// # Arguments
    ///
    /// * `row` - The row within the parent
    /// * `column` - The column within the parent
    /// * `parent` - The parent index, or `ModelIndex::invalid()` for root
    ///   items
    #[inline]
    pub fn new(row: usize, column: usize, parent: ModelIndex) -> Self {
        Self {
            row,
            column,
            parent: if parent.is_valid() {
                Some(Box::new(parent))
            } else {
                None
            },
            valid: true,
        }
    }

    /// Creates a root-level index at the given row and column.
    #[inline]
    pub fn root(row: usize, column: usize) -> Self {
        Self::new(row, column, Self::invalid())
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the parent index, or an invalid index if this is a root item.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// Returns `true` if this index has a valid parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Creates a sibling index at the given row and column.
    ///
    /// This is equivalent to an index at `(row, column)` with the same
    /// parent as this index.
    pub fn sibling(&self, row: usize, column: usize) -> ModelIndex {
        if !self.valid {
            return ModelIndex::invalid();
        }
        ModelIndex::new(row, column, self.parent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 0);
        assert!(!index.has_parent());
    }

    #[test]
    fn test_equal_cells_compare_equal() {
        let a = ModelIndex::root(3, 1);
        let b = ModelIndex::root(3, 1);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_sibling() {
        let parent = ModelIndex::root(0, 0);
        let child = ModelIndex::new(2, 0, parent.clone());
        let sibling = child.sibling(5, 1);

        assert_eq!(sibling.row(), 5);
        assert_eq!(sibling.column(), 1);
        assert_eq!(sibling.parent(), parent);
    }

    #[test]
    fn test_sibling_of_invalid() {
        assert!(!ModelIndex::invalid().sibling(1, 1).is_valid());
    }
}
