//! Selection cursor over the rendered suggestion rows

/// Index of the highlighted suggestion, or none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Select `index` directly (pointer selection)
    ///
    /// Returns false and leaves the selection alone when `index` is out of
    /// range.
    pub fn select_index(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            return false;
        }
        self.selected_index = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move down one row, wrapping from the last row to the first
    ///
    /// With no selection the first row is selected. No-op for an empty list.
    pub fn navigate_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % count),
            None => Some(0),
        };
    }

    /// Move up one row, wrapping from the first row to the last
    ///
    /// With no selection the last row is selected. No-op for an empty list.
    pub fn navigate_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(count - 1),
            Some(current) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
