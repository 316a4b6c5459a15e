//! Selection state tracking for item views.
//!
//! `SelectionModel` tracks which items are selected and which item is
//! current. Views own a selection model and expose read access to it;
//! delegates and editors query it to render selection highlighting
//! consistently.

use std::collections::HashSet;

use starlight_core::Signal;

use super::index::ModelIndex;

/// How many items can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item is selected; selecting replaces the selection.
    Single,
    /// Any number of items can be selected.
    #[default]
    Multi,
}

/// Tracks the selected items of a view.
///
/// # Signals
///
/// - `selection_changed(())`: Emitted whenever the set of selected items
///   changes.
pub struct SelectionModel {
    /// The selected items.
    selected: HashSet<ModelIndex>,
    /// The current item (keyboard focus), if any.
    current: ModelIndex,
    /// The selection mode.
    mode: SelectionMode,

    /// Signal emitted when the selection changes.
    pub selection_changed: Signal<()>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Create an empty selection model.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
            current: ModelIndex::invalid(),
            mode: SelectionMode::default(),
            selection_changed: Signal::new(),
        }
    }

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Set the selection mode.
    ///
    /// Switching to `Single` with more than one item selected clears the
    /// selection.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single && self.selected.len() > 1 {
            self.selected.clear();
            self.selection_changed.emit(());
        }
    }

    /// Select an item.
    ///
    /// Invalid indices are ignored. In `Single` mode this replaces the
    /// previous selection.
    pub fn select(&mut self, index: ModelIndex) {
        if !index.is_valid() || self.selected.contains(&index) {
            return;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.insert(index);
        self.selection_changed.emit(());
    }

    /// Deselect an item.
    pub fn deselect(&mut self, index: &ModelIndex) {
        if self.selected.remove(index) {
            self.selection_changed.emit(());
        }
    }

    /// Toggle the selection state of an item.
    pub fn toggle(&mut self, index: ModelIndex) {
        if self.selected.contains(&index) {
            self.deselect(&index);
        } else {
            self.select(index);
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.selection_changed.emit(());
        }
    }

    /// Check if an item is selected.
    pub fn is_selected(&self, index: &ModelIndex) -> bool {
        self.selected.contains(index)
    }

    /// Check if anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Get the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Get the current item.
    pub fn current(&self) -> &ModelIndex {
        &self.current
    }

    /// Set the current item.
    pub fn set_current(&mut self, index: ModelIndex) {
        self.current = index;
    }
}
